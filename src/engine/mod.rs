// ==========================================
// 生产排产方案校验器 - 引擎层
// ==========================================
// 职责: 实现方案一致性校验规则
// 红线: 引擎不做 I/O，所有违规必须输出可读消息
// ==========================================

pub mod batch_time;
pub mod calendar_conflict;
pub mod equipment_overlap;
pub mod plan_check;
pub mod quantity;
pub mod sizing;
pub mod time_core;
pub mod validator;

// 重导出核心引擎
pub use batch_time::BatchTimeCheck;
pub use calendar_conflict::CalendarConflictCheck;
pub use equipment_overlap::EquipmentOverlapCheck;
pub use plan_check::PlanCheck;
pub use quantity::QuantityConservationCheck;
pub use sizing::EquipmentSizingCheck;
pub use time_core::{overlaps, parse_timestamp, Instant, TimeInterval, TimestampError};
pub use validator::{validate, PlanValidator, ValidationReport};
