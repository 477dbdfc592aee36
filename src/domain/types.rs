// ==========================================
// 生产排产方案校验器 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 违规类型 (Violation Kind)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与 JSON 报告一致)
// 排序: 按校验阶段顺序，用于分类统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    // ===== 批次时间 =====
    MissingBatchTime,   // 缺少开始/结束时间
    MalformedTimestamp, // 时间格式非法
    InvalidTimeOrder,   // start_time >= end_time

    // ===== 数量守恒 =====
    QuantityMismatch, // 订单量与批次量不一致

    // ===== 设备适配 =====
    UnknownEquipment,    // 设备不存在
    IncompatibleProduct, // 设备不支持该产品
    BelowMinCapacity,    // 低于最小装载
    AboveMaxCapacity,    // 高于最大装载

    // ===== 日历冲突 =====
    DowntimeConflict, // 与设备停机重叠
    HolidayConflict,  // 与全厂假日重叠

    // ===== 设备占用 =====
    EquipmentOverlap, // 同设备批次重叠
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingBatchTime => "MISSING_BATCH_TIME",
            ViolationKind::MalformedTimestamp => "MALFORMED_TIMESTAMP",
            ViolationKind::InvalidTimeOrder => "INVALID_TIME_ORDER",
            ViolationKind::QuantityMismatch => "QUANTITY_MISMATCH",
            ViolationKind::UnknownEquipment => "UNKNOWN_EQUIPMENT",
            ViolationKind::IncompatibleProduct => "INCOMPATIBLE_PRODUCT",
            ViolationKind::BelowMinCapacity => "BELOW_MIN_CAPACITY",
            ViolationKind::AboveMaxCapacity => "ABOVE_MAX_CAPACITY",
            ViolationKind::DowntimeConflict => "DOWNTIME_CONFLICT",
            ViolationKind::HolidayConflict => "HOLIDAY_CONFLICT",
            ViolationKind::EquipmentOverlap => "EQUIPMENT_OVERLAP",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        let kind = ViolationKind::DowntimeConflict;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind));
    }

    #[test]
    fn test_ordering_follows_pass_order() {
        assert!(ViolationKind::MissingBatchTime < ViolationKind::QuantityMismatch);
        assert!(ViolationKind::QuantityMismatch < ViolationKind::UnknownEquipment);
        assert!(ViolationKind::HolidayConflict < ViolationKind::EquipmentOverlap);
    }
}
