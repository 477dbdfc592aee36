// ==========================================
// 生产排产方案校验器 - 违规记录
// ==========================================
// 职责: 单条校验违规的结构化表示（类型 + 相关标识 + 可读消息）
// 红线: 违规只收集、不抛出；引擎永不因违规提前返回
// ==========================================

use crate::domain::types::ViolationKind;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// PlanViolation - 方案违规
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanViolation {
    pub kind: ViolationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// 冲突对象: 停机ID / 假日名称 / 重叠的另一批次ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    pub message: String,
}

impl PlanViolation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            batch_id: None,
            equipment_id: None,
            product_code: None,
            reference_id: None,
            message: message.into(),
        }
    }

    pub fn with_batch(mut self, batch_id: &str) -> Self {
        self.batch_id = Some(batch_id.to_string());
        self
    }

    pub fn with_equipment(mut self, equipment_id: &str) -> Self {
        self.equipment_id = Some(equipment_id.to_string());
        self
    }

    pub fn with_product(mut self, product_code: &str) -> Self {
        self.product_code = Some(product_code.to_string());
        self
    }

    pub fn with_reference(mut self, reference_id: &str) -> Self {
        self.reference_id = Some(reference_id.to_string());
        self
    }
}

impl fmt::Display for PlanViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
