// ==========================================
// 生产排产方案校验器 - 批次时间校验
// ==========================================
// 规则:
// 1. start_time / end_time 格式非法 → MALFORMED_TIMESTAMP
// 2. 任一缺失 → MISSING_BATCH_TIME
// 3. start_time >= end_time → INVALID_TIME_ORDER
// 说明: 本阶段不拦截后续阶段，后续阶段各自跳过无法解析的批次
// ==========================================

use crate::domain::{Plan, PlanViolation, ProductionBatch, ViolationKind};
use crate::engine::plan_check::PlanCheck;
use crate::engine::time_core::parse_timestamp;

pub struct BatchTimeCheck;

impl BatchTimeCheck {
    /// 校验单个批次的时间
    ///
    /// 先解析 start_time 再解析 end_time；存在的值解析失败优先于另一值缺失
    fn check_batch(batch: &ProductionBatch) -> Option<PlanViolation> {
        let parsed = parse_timestamp(batch.start_time.as_deref()).and_then(|start| {
            parse_timestamp(batch.end_time.as_deref()).map(|end| (start, end))
        });

        match parsed {
            Err(err) => Some(
                PlanViolation::new(
                    ViolationKind::MalformedTimestamp,
                    format!(
                        "ERROR: Batch {} has invalid datetime format: {}.",
                        batch.batch_id, err
                    ),
                )
                .with_batch(&batch.batch_id),
            ),
            Ok((Some(start), Some(end))) => {
                if start >= end {
                    Some(
                        PlanViolation::new(
                            ViolationKind::InvalidTimeOrder,
                            format!(
                                "ERROR: Batch {} start_time ({}) >= end_time ({}).",
                                batch.batch_id,
                                batch.start_time.as_deref().unwrap_or_default(),
                                batch.end_time.as_deref().unwrap_or_default()
                            ),
                        )
                        .with_batch(&batch.batch_id),
                    )
                } else {
                    None
                }
            }
            Ok(_) => Some(
                PlanViolation::new(
                    ViolationKind::MissingBatchTime,
                    format!(
                        "ERROR: Batch {} has missing start_time or end_time.",
                        batch.batch_id
                    ),
                )
                .with_batch(&batch.batch_id),
            ),
        }
    }
}

impl PlanCheck for BatchTimeCheck {
    fn name(&self) -> &'static str {
        "batch_time"
    }

    fn check(&self, plan: &Plan) -> Vec<PlanViolation> {
        plan.batches().iter().filter_map(Self::check_batch).collect()
    }
}
