// ==========================================
// 生产排产方案校验器 - 配置层
// ==========================================
// 职责: 校验参数与缺省值管理,支持文件 + 环境变量覆写
// ==========================================

pub mod validator_config;

// 重导出核心配置
pub use validator_config::{
    config_keys, default_config_path, ConfigError, ConfigResult, ValidatorConfig,
};
