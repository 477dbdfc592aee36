// ==========================================
// 生产排产方案校验器 - 校验配置
// ==========================================
// 职责: 配置加载（JSON 文件 + 环境变量覆写）、缺省值管理
// 优先级: 环境变量 > 配置文件 > 内置默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置键 (环境变量)
// ==========================================
pub mod config_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "PLAN_VALIDATOR_CONFIG";
    /// 数量比较舍入位数
    pub const QUANTITY_DECIMALS: &str = "PLAN_VALIDATOR_QUANTITY_DECIMALS";
    /// 日志级别
    pub const LOG_LEVEL: &str = "PLAN_VALIDATOR_LOG_LEVEL";
}

/// 默认配置目录下的文件名（子目录为 APP_NAME）
const CONFIG_FILE_NAME: &str = "config.json";

/// f64 十进制有效位上限，超出后舍入失去意义
const MAX_QUANTITY_DECIMALS: u32 = 15;

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not readable ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("config file is not valid JSON ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ValidatorConfig - 校验配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// 数量守恒比较的十进制舍入位数（默认 9）
    pub quantity_decimals: u32,
    /// 设备缺省最小装载 (kg)
    pub default_min_capacity_kg: f64,
    /// 设备缺省最大装载 (kg)，近似无上限
    pub default_max_capacity_kg: f64,
    /// 默认日志级别（RUST_LOG 优先）
    pub log_level: String,
    /// 实际读取的配置文件（None 表示内置默认值）
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            quantity_decimals: 9,
            default_min_capacity_kg: 0.0,
            default_max_capacity_kg: 1e18,
            log_level: "warn".to_string(),
            source: None,
        }
    }
}

impl ValidatorConfig {
    /// 加载配置
    ///
    /// # 参数
    /// - explicit_path: 命令行指定的配置文件（优先）
    ///
    /// # 查找顺序
    /// 1. explicit_path
    /// 2. $PLAN_VALIDATOR_CONFIG
    /// 3. <系统配置目录>/plan-validator/config.json（存在时）
    /// 4. 内置默认值
    ///
    /// 最后应用环境变量覆写
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(config_keys::CONFIG_PATH).map(PathBuf::from))
            .or_else(|| default_config_path().filter(|p| p.is_file()));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取配置（缺失字段使用默认值）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: Self = serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// 应用环境变量覆写
    ///
    /// lookup 以参数注入，便于测试时不污染进程环境
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(config_keys::QUANTITY_DECIMALS) {
            self.quantity_decimals =
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: config_keys::QUANTITY_DECIMALS.to_string(),
                        value: value.clone(),
                        message: e.to_string(),
                    })?;
        }

        if let Some(value) = lookup(config_keys::LOG_LEVEL) {
            let value = value.trim();
            if !value.is_empty() {
                self.log_level = value.to_string();
            }
        }

        Ok(())
    }

    /// 校验配置取值
    pub fn validate(&self) -> ConfigResult<()> {
        if self.quantity_decimals > MAX_QUANTITY_DECIMALS {
            return Err(ConfigError::InvalidValue {
                key: "quantity_decimals".to_string(),
                value: self.quantity_decimals.to_string(),
                message: format!("must be <= {}", MAX_QUANTITY_DECIMALS),
            });
        }

        if self.default_min_capacity_kg > self.default_max_capacity_kg {
            return Err(ConfigError::InvalidValue {
                key: "default_min_capacity_kg".to_string(),
                value: self.default_min_capacity_kg.to_string(),
                message: format!(
                    "must be <= default_max_capacity_kg ({})",
                    self.default_max_capacity_kg
                ),
            });
        }

        Ok(())
    }
}

/// 系统配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join(CONFIG_FILE_NAME))
}
