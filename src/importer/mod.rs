// ==========================================
// 生产排产方案校验器 - 导入层
// ==========================================
// 职责: 外部方案文档读取,生成领域方案
// 支持: JSON
// ==========================================

// 模块声明
pub mod error;
pub mod plan_loader;
pub mod raw_document;

// 重导出核心类型
pub use error::{ImportError, ImportResult, MalformedRecord};
pub use plan_loader::PlanLoader;
pub use raw_document::RawPlanDocument;
