// ==========================================
// 生产排产方案校验器 - 校验阶段接口
// ==========================================
// 职责: 定义单个校验阶段的统一接口
// 红线: 各阶段互不依赖，只读方案，只返回违规列表
// ==========================================

use crate::domain::{Plan, PlanViolation};

// ==========================================
// Trait: PlanCheck
// ==========================================
// 实现者: BatchTimeCheck / QuantityConservationCheck / EquipmentSizingCheck /
//         CalendarConflictCheck / EquipmentOverlapCheck
pub trait PlanCheck: Send + Sync {
    /// 阶段名称（用于日志）
    fn name(&self) -> &'static str;

    /// 执行校验，返回本阶段发现的全部违规（可为空）
    fn check(&self, plan: &Plan) -> Vec<PlanViolation>;
}
