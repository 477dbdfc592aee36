// ==========================================
// 生产排产方案校验器 - 核心库
// ==========================================
// 职责: 方案执行前的一致性校验（收集全部违规，不修复方案）
// 校验: 批次时间 / 数量守恒 / 设备适配 / 停机假日冲突 / 设备重叠
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 校验规则
pub mod engine;

// 导入层 - 方案文档
pub mod importer;

// 配置层 - 校验配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Downtime, Equipment, Holiday, Plan, PlanViolation, ProductOrder, ProductionBatch,
    ViolationKind,
};

// 引擎
pub use engine::{validate, PlanCheck, PlanValidator, ValidationReport};

// 导入
pub use importer::{ImportError, PlanLoader};

// 配置
pub use config::ValidatorConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "plan-validator";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
