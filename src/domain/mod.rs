// ==========================================
// 生产排产方案校验器 - 领域模型层
// ==========================================
// 职责: 定义方案实体、违规类型与违规记录
// 红线: 不含文件读取逻辑,不含校验逻辑
// ==========================================

pub mod plan;
pub mod types;
pub mod violation;

// 重导出核心类型
pub use plan::{
    Downtime, Equipment, Holiday, Plan, PlanConstraints, PlanInputs, PlanOutputs, ProductOrder,
    ProductionBatch,
};
pub use types::ViolationKind;
pub use violation::PlanViolation;
