// ==========================================
// 生产排产方案校验器 - 设备适配校验
// ==========================================
// 规则 (逐批次独立):
// 1. 设备不存在 → UNKNOWN_EQUIPMENT，跳过该批次其余子检查
// 2. 产品不在设备允许列表 → INCOMPATIBLE_PRODUCT
// 3. 数量 < min_capacity_kg → BELOW_MIN_CAPACITY
// 4. 数量 > max_capacity_kg → ABOVE_MAX_CAPACITY
// 说明: 2/3/4 互不排斥，同一批次可同时触发
// ==========================================

use std::collections::HashMap;

use crate::domain::{Equipment, Plan, PlanViolation, ProductionBatch, ViolationKind};
use crate::engine::plan_check::PlanCheck;
use crate::engine::time_core::format_kg;

pub struct EquipmentSizingCheck;

impl EquipmentSizingCheck {
    /// 构建设备索引（同ID重复时后者覆盖前者）
    fn index_equipment(equipment: &[Equipment]) -> HashMap<&str, &Equipment> {
        let mut by_id = HashMap::with_capacity(equipment.len());
        for eq in equipment {
            if by_id.insert(eq.equipment_id.as_str(), eq).is_some() {
                tracing::warn!(
                    equipment_id = %eq.equipment_id,
                    "设备ID重复，以最后一条记录为准"
                );
            }
        }
        by_id
    }

    fn check_batch(batch: &ProductionBatch, eq: &Equipment) -> Vec<PlanViolation> {
        let mut violations = Vec::new();
        let bid = batch.batch_id.as_str();
        let eq_id = eq.equipment_id.as_str();

        if !eq.supports(&batch.product_code) {
            violations.push(
                PlanViolation::new(
                    ViolationKind::IncompatibleProduct,
                    format!(
                        "ERROR: Batch {} product {} not supported by equipment {} (allowed: {}).",
                        bid,
                        batch.product_code,
                        eq_id,
                        format_code_list(&eq.product_codes)
                    ),
                )
                .with_batch(bid)
                .with_equipment(eq_id)
                .with_product(&batch.product_code),
            );
        }

        if batch.quantity_kg < eq.min_capacity_kg {
            violations.push(
                PlanViolation::new(
                    ViolationKind::BelowMinCapacity,
                    format!(
                        "ERROR: Batch {} ({} kg) is below min capacity ({} kg) for {}.",
                        bid,
                        format_kg(batch.quantity_kg),
                        format_kg(eq.min_capacity_kg),
                        eq_id
                    ),
                )
                .with_batch(bid)
                .with_equipment(eq_id),
            );
        }

        if batch.quantity_kg > eq.max_capacity_kg {
            violations.push(
                PlanViolation::new(
                    ViolationKind::AboveMaxCapacity,
                    format!(
                        "ERROR: Batch {} ({} kg) is above max capacity ({} kg) for {}.",
                        bid,
                        format_kg(batch.quantity_kg),
                        format_kg(eq.max_capacity_kg),
                        eq_id
                    ),
                )
                .with_batch(bid)
                .with_equipment(eq_id),
            );
        }

        violations
    }
}

impl PlanCheck for EquipmentSizingCheck {
    fn name(&self) -> &'static str {
        "equipment_sizing"
    }

    fn check(&self, plan: &Plan) -> Vec<PlanViolation> {
        let eq_by_id = Self::index_equipment(plan.equipment());
        let mut violations = Vec::new();

        for batch in plan.batches() {
            match eq_by_id.get(batch.equipment_id.as_str()) {
                Some(eq) => violations.extend(Self::check_batch(batch, eq)),
                None => violations.push(
                    PlanViolation::new(
                        ViolationKind::UnknownEquipment,
                        format!(
                            "ERROR: Batch {} assigned to unknown equipment {}.",
                            batch.batch_id, batch.equipment_id
                        ),
                    )
                    .with_batch(&batch.batch_id)
                    .with_equipment(&batch.equipment_id),
                ),
            }
        }

        violations
    }
}

/// 允许产品列表文本: ['A', 'B']
fn format_code_list(codes: &[String]) -> String {
    let quoted: Vec<String> = codes.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}
