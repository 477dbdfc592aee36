// ==========================================
// 生产排产方案校验器 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 导入错误属于结构性失败，发生时不进入校验引擎
// ==========================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ==========================================
// MalformedRecord - 记录结构缺陷
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRecord {
    pub collection: String, // 所在集合（如 outputs.production_batches）
    pub index: usize,       // 集合内序号（从 0 开始）
    pub field: String,      // 字段名
    pub reason: String,     // 缺陷说明
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}].{}: {}",
            self.collection, self.index, self.field, self.reason
        )
    }
}

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    // ===== 文档解析错误 =====
    #[error("JSON parse failed: {0}")]
    JsonParseError(String),

    // ===== 记录结构错误 =====
    #[error("{} malformed record(s): {}", .0.len(), join_records(.0))]
    MalformedRecords(Vec<MalformedRecord>),
}

fn join_records(records: &[MalformedRecord]) -> String {
    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(err.to_string()),
            _ => ImportError::FileReadError(err.to_string()),
        }
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
