// ==========================================
// 生产排产方案校验器 - Time Core 纯函数库
// ==========================================
// 职责: 时间戳规范化、半开区间重叠判定、时刻/数量格式化
// 红线: 无状态、无副作用、无 I/O 操作、不记录日志
// ==========================================

use chrono::{DateTime, FixedOffset, SecondsFormat, Timelike};
use thiserror::Error;

/// 规范化后的可比较时刻（保留原始偏移，比较按绝对时刻）
pub type Instant = DateTime<FixedOffset>;

/// UTC 单字符标记
const UTC_MARKER: char = 'Z';

/// 显式零偏移
const ZERO_OFFSET: &str = "+00:00";

/// 无秒格式兜底（如 2025-11-03T08:00+00:00 / 2025-11-03 08:00+00:00）
const MINUTE_PRECISION_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

// ==========================================
// TimestampError - 时间戳解析错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("invalid timestamp '{raw}': {reason}")]
    Malformed { raw: String, reason: String },
}

/// 解析时间戳
///
/// # 规则
/// - None → Ok(None)（是否构成错误由调用方决定）
/// - 末尾 'Z' 替换为 "+00:00" 后按带偏移的日期时间解析
/// - 不带偏移的时间视为非法
///
/// # 返回
/// - Ok(Some(Instant)): 解析成功
/// - Ok(None): 输入缺失
/// - Err(TimestampError::Malformed): 格式非法
pub fn parse_timestamp(raw: Option<&str>) -> Result<Option<Instant>, TimestampError> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Ok(None),
    };

    let normalized = normalize_utc_marker(raw);

    match DateTime::parse_from_rfc3339(&normalized) {
        Ok(instant) => Ok(Some(instant)),
        Err(rfc_err) => MINUTE_PRECISION_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
            .map(Some)
            .ok_or_else(|| TimestampError::Malformed {
                raw: raw.to_string(),
                reason: rfc_err.to_string(),
            }),
    }
}

/// 将末尾的 UTC 标记替换为显式零偏移
fn normalize_utc_marker(raw: &str) -> String {
    match raw.strip_suffix(UTC_MARKER) {
        Some(head) => format!("{}{}", head, ZERO_OFFSET),
        None => raw.to_string(),
    }
}

/// 半开区间重叠判定
///
/// [a_start, a_end) 与 [b_start, b_end) 重叠 ⇔ a_start < b_end 且 b_start < a_end
///
/// 首尾相接（a_end == b_start）不算重叠：同设备背靠背批次合法
pub fn overlaps<T: PartialOrd>(a_start: &T, a_end: &T, b_start: &T, b_end: &T) -> bool {
    a_start < b_end && b_start < a_end
}

// ==========================================
// TimeInterval - 半开时间区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: Instant,
    pub end: Instant,
}

impl TimeInterval {
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        overlaps(&self.start, &self.end, &other.start, &other.end)
    }

    /// 规范化文本: "<start> - <end>"
    pub fn describe(&self) -> String {
        format!("{} - {}", format_instant(&self.start), format_instant(&self.end))
    }
}

/// 时刻规范化文本
///
/// 格式: YYYY-MM-DDTHH:MM:SS[.ffffff]±HH:MM（偏移保持原样，零偏移输出 +00:00）
pub fn format_instant(instant: &Instant) -> String {
    if instant.nanosecond() == 0 {
        instant.to_rfc3339_opts(SecondsFormat::Secs, false)
    } else {
        instant.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

/// 按十进制位数舍入
///
/// 通过定点格式化完成十进制舍入（非相对误差比较），保证跨输入结果可复现
pub fn round_decimal(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// 重量文本（最短往返表示）
///
/// - 1e-4 <= |x| < 1e16: 十进制，整数值带 ".0"（如 100.0）
/// - 其余: 指数形式，指数带符号且至少两位（如 1e+18、1.5e-05）
pub fn format_kg(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> Instant {
        parse_timestamp(Some(raw)).unwrap().unwrap()
    }

    #[test]
    fn test_parse_none_is_absent() {
        assert_eq!(parse_timestamp(None), Ok(None));
    }

    #[test]
    fn test_parse_utc_marker_equals_zero_offset() {
        assert_eq!(ts("2025-11-03T08:00:00Z"), ts("2025-11-03T08:00:00+00:00"));
        assert_eq!(ts("2025-11-03T08:00:00Z").offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_keeps_offset_and_compares_instants() {
        let berlin = ts("2025-11-03T09:00:00+01:00");
        let utc = ts("2025-11-03T08:00:00Z");

        assert_eq!(berlin.offset().local_minus_utc(), 3600);
        assert_eq!(berlin, utc);
    }

    #[test]
    fn test_parse_minute_precision() {
        assert_eq!(ts("2025-11-03T08:00Z"), ts("2025-11-03T08:00:00Z"));
        assert_eq!(ts("2025-11-03T09:00+01:00"), ts("2025-11-03T08:00:00Z"));
    }

    #[test]
    fn test_parse_space_separator() {
        let expected = ts("2025-11-03T08:00:00Z");

        // 带秒
        assert_eq!(ts("2025-11-03 08:00:00Z"), expected);
        assert_eq!(ts("2025-11-03 10:00:00+02:00"), expected);
        // 无秒
        assert_eq!(ts("2025-11-03 08:00Z"), expected);
        assert_eq!(ts("2025-11-03 10:00+02:00"), expected);

        assert_eq!(
            format_instant(&ts("2025-11-03 08:00Z")),
            "2025-11-03T08:00:00+00:00"
        );
        // 无偏移仍然非法
        assert!(parse_timestamp(Some("2025-11-03 08:00")).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage_and_naive() {
        let err = parse_timestamp(Some("not-a-date")).unwrap_err();
        match err {
            TimestampError::Malformed { raw, .. } => assert_eq!(raw, "not-a-date"),
        }

        assert!(parse_timestamp(Some("2025-11-03T08:00:00")).is_err());
        assert!(parse_timestamp(Some("")).is_err());
    }

    #[test]
    fn test_overlaps_strict_boundaries() {
        // 首尾相接不重叠
        assert!(!overlaps(&0, &10, &10, &20));
        assert!(!overlaps(&10, &20, &0, &10));
        // 部分重叠
        assert!(overlaps(&0, &10, &5, &20));
        // 包含
        assert!(overlaps(&0, &30, &5, &20));
        // 零长度区间与自身不重叠
        assert!(!overlaps(&5, &5, &5, &5));
        assert!(overlaps(&0, &10, &0, &10));
    }

    #[test]
    fn test_interval_describe() {
        let interval = TimeInterval::new(ts("2025-11-03T08:00:00Z"), ts("2025-11-03T10:30:00Z"));
        assert_eq!(
            interval.describe(),
            "2025-11-03T08:00:00+00:00 - 2025-11-03T10:30:00+00:00"
        );
    }

    #[test]
    fn test_format_instant_fraction() {
        assert_eq!(
            format_instant(&ts("2025-11-03T08:00:00.5+02:00")),
            "2025-11-03T08:00:00.500000+02:00"
        );
    }

    #[test]
    fn test_round_decimal() {
        assert_eq!(round_decimal(0.1 + 0.2, 9), 0.3);
        assert_eq!(round_decimal(100.0, 9), 100.0);
        assert_eq!(round_decimal(1.0000000004, 9), 1.0);
        assert_eq!(round_decimal(1.0000000006, 9), 1.000000001);
    }

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(100.0), "100.0");
        assert_eq!(format_kg(90.0), "90.0");
        assert_eq!(format_kg(12.5), "12.5");
        assert_eq!(format_kg(0.3), "0.3");
    }

    #[test]
    fn test_format_kg_exponent_form() {
        assert_eq!(format_kg(1e18), "1e+18");
        assert_eq!(format_kg(1e16), "1e+16");
        assert_eq!(format_kg(1.5e20), "1.5e+20");
        assert_eq!(format_kg(1e-5), "1e-05");
        assert_eq!(format_kg(2.5e-7), "2.5e-07");
        assert_eq!(format_kg(1e100), "1e+100");
        // 阈值内保持十进制
        assert_eq!(format_kg(9999999999999998.0), "9999999999999998.0");
        assert_eq!(format_kg(0.0001), "0.0001");
        assert_eq!(format_kg(f64::INFINITY), "inf");
    }
}
