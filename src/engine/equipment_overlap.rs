// ==========================================
// 生产排产方案校验器 - 设备重叠占用校验
// ==========================================
// 规则:
// - 按设备分组（按设备首次出现顺序），组内按 start_time 稳定排序
// - 相邻批次: 前一批 end_time > 后一批 start_time → EQUIPMENT_OVERLAP
// - start_time 缺失/非法的批次不参与排序与比较
// - 前一批 end_time 缺失/非法时跳过该相邻对
// 已知局限: 只比较相邻对，依赖区间时长非负
// ==========================================

use std::collections::HashMap;

use crate::domain::{Plan, PlanViolation, ProductionBatch, ViolationKind};
use crate::engine::plan_check::PlanCheck;
use crate::engine::time_core::{format_instant, parse_timestamp, Instant};

pub struct EquipmentOverlapCheck;

/// 组内已解析开始时间的批次
struct ScheduledBatch<'a> {
    batch: &'a ProductionBatch,
    start: Instant,
}

impl EquipmentOverlapCheck {
    /// 按设备分组，保持设备首次出现顺序
    fn group_by_equipment(batches: &[ProductionBatch]) -> Vec<(&str, Vec<&ProductionBatch>)> {
        let mut groups: Vec<(&str, Vec<&ProductionBatch>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for batch in batches {
            let eq_id = batch.equipment_id.as_str();
            match index.get(eq_id) {
                Some(&pos) => groups[pos].1.push(batch),
                None => {
                    index.insert(eq_id, groups.len());
                    groups.push((eq_id, vec![batch]));
                }
            }
        }

        groups
    }

    fn check_group(eq_id: &str, batches: &[&ProductionBatch]) -> Vec<PlanViolation> {
        let mut scheduled: Vec<ScheduledBatch> = batches
            .iter()
            .copied()
            .filter_map(|batch| {
                parse_timestamp(batch.start_time.as_deref())
                    .ok()
                    .flatten()
                    .map(|start| ScheduledBatch { batch, start })
            })
            .collect();
        scheduled.sort_by(|a, b| a.start.cmp(&b.start));

        let mut violations = Vec::new();
        for pair in scheduled.windows(2) {
            let (cur, nxt) = (&pair[0], &pair[1]);
            let cur_end = match parse_timestamp(cur.batch.end_time.as_deref()) {
                Ok(Some(end)) => end,
                _ => continue,
            };

            if cur_end > nxt.start {
                violations.push(
                    PlanViolation::new(
                        ViolationKind::EquipmentOverlap,
                        format!(
                            "ERROR: Equipment {} has overlapping batches: {} ends at {} > {} starts at {}.",
                            eq_id,
                            cur.batch.batch_id,
                            format_instant(&cur_end),
                            nxt.batch.batch_id,
                            format_instant(&nxt.start)
                        ),
                    )
                    .with_equipment(eq_id)
                    .with_batch(&cur.batch.batch_id)
                    .with_reference(&nxt.batch.batch_id),
                );
            }
        }

        violations
    }
}

impl PlanCheck for EquipmentOverlapCheck {
    fn name(&self) -> &'static str {
        "equipment_overlap"
    }

    fn check(&self, plan: &Plan) -> Vec<PlanViolation> {
        Self::group_by_equipment(plan.batches())
            .into_iter()
            .flat_map(|(eq_id, batches)| Self::check_group(eq_id, &batches))
            .collect()
    }
}
