// ==========================================
// 生产排产方案校验器 - 停机/假日冲突校验
// ==========================================
// 规则:
// - 批次区间与同设备停机区间重叠 → DOWNTIME_CONFLICT（每个停机一条）
// - 批次区间与任一全厂假日区间重叠 → HOLIDAY_CONFLICT（每个假日一条）
// - 时间缺失/非法的批次静默跳过（已由批次时间校验报告）
// ==========================================

use std::collections::HashMap;

use crate::domain::{Plan, PlanViolation, ProductionBatch, ViolationKind};
use crate::engine::plan_check::PlanCheck;
use crate::engine::time_core::{parse_timestamp, TimeInterval};

pub struct CalendarConflictCheck;

/// 停机窗口（区间 + 停机ID）
struct DowntimeWindow<'a> {
    interval: TimeInterval,
    downtime_id: &'a str,
}

/// 假日窗口（区间 + 假日名称）
struct HolidayWindow<'a> {
    interval: TimeInterval,
    holiday_name: &'a str,
}

impl CalendarConflictCheck {
    /// 解析批次区间；缺失或非法返回 None
    fn batch_interval(batch: &ProductionBatch) -> Option<TimeInterval> {
        let start = parse_timestamp(batch.start_time.as_deref()).ok()??;
        let end = parse_timestamp(batch.end_time.as_deref()).ok()??;
        Some(TimeInterval::new(start, end))
    }
}

impl PlanCheck for CalendarConflictCheck {
    fn name(&self) -> &'static str {
        "calendar_conflict"
    }

    fn check(&self, plan: &Plan) -> Vec<PlanViolation> {
        let mut downtimes_by_eq: HashMap<&str, Vec<DowntimeWindow>> = HashMap::new();
        for d in plan.downtimes() {
            downtimes_by_eq
                .entry(d.equipment_id.as_str())
                .or_default()
                .push(DowntimeWindow {
                    interval: TimeInterval::new(d.start_time, d.end_time),
                    downtime_id: &d.downtime_id,
                });
        }

        let holidays: Vec<HolidayWindow> = plan
            .holidays()
            .iter()
            .map(|h| HolidayWindow {
                interval: TimeInterval::new(h.start_time, h.end_time),
                holiday_name: &h.holiday_name,
            })
            .collect();

        let mut violations = Vec::new();

        for batch in plan.batches() {
            let interval = match Self::batch_interval(batch) {
                Some(interval) => interval,
                None => continue,
            };

            // 设备停机
            if let Some(windows) = downtimes_by_eq.get(batch.equipment_id.as_str()) {
                for window in windows.iter().filter(|w| interval.overlaps(&w.interval)) {
                    violations.push(
                        PlanViolation::new(
                            ViolationKind::DowntimeConflict,
                            format!(
                                "ERROR: Batch {} ({}) overlaps downtime {} on {} ({}).",
                                batch.batch_id,
                                interval.describe(),
                                window.downtime_id,
                                batch.equipment_id,
                                window.interval.describe()
                            ),
                        )
                        .with_batch(&batch.batch_id)
                        .with_equipment(&batch.equipment_id)
                        .with_reference(window.downtime_id),
                    );
                }
            }

            // 全厂假日
            for window in holidays.iter().filter(|w| interval.overlaps(&w.interval)) {
                violations.push(
                    PlanViolation::new(
                        ViolationKind::HolidayConflict,
                        format!(
                            "ERROR: Batch {} ({}) overlaps holiday '{}' ({}).",
                            batch.batch_id,
                            interval.describe(),
                            window.holiday_name,
                            window.interval.describe()
                        ),
                    )
                    .with_batch(&batch.batch_id)
                    .with_equipment(&batch.equipment_id)
                    .with_reference(window.holiday_name),
                );
            }
        }

        violations
    }
}
