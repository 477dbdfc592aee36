// ==========================================
// 生产排产方案校验器 - 原始方案文档
// ==========================================
// 职责: 与 JSON 文档一一对应的宽松结构（所有字段可缺省）
// 说明: 必填校验与缺省值注入在 PlanLoader 中完成，不在此层静默补值
// ==========================================

use serde::Deserialize;
use serde_json::Value;

// ==========================================
// RawNumber - 数值字段原始值
// ==========================================
// JSON 数字与数字文本（如 "100"）均可接受；其他类型保留原值，由加载器记为结构缺陷
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawNumber {
    /// 转换为 f64；失败时返回缺陷说明
    pub fn to_f64(&self) -> Result<f64, String> {
        match self {
            RawNumber::Number(n) => Ok(*n),
            RawNumber::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("expected a number, got '{}'", text)),
            RawNumber::Other(value) => Err(format!("expected a number, got {}", value)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPlanDocument {
    pub inputs: RawInputs,
    pub outputs: RawOutputs,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub product_orders: Vec<RawProductOrder>,
    pub equipment: Vec<RawEquipment>,
    pub constraints: RawConstraints,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConstraints {
    pub downtimes: Vec<RawDowntime>,
    pub holidays: Vec<RawHoliday>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutputs {
    pub production_batches: Vec<RawProductionBatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProductOrder {
    pub product_code: Option<String>,
    pub quantity_kg: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEquipment {
    pub equipment_id: Option<String>,
    pub min_capacity_kg: Option<RawNumber>,
    pub max_capacity_kg: Option<RawNumber>,
    pub product_codes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDowntime {
    pub downtime_id: Option<String>,
    pub equipment_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHoliday {
    pub holiday_name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProductionBatch {
    pub batch_id: Option<String>,
    pub product_code: Option<String>,
    pub quantity_kg: Option<RawNumber>,
    pub equipment_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
