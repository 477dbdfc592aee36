// ==========================================
// 生产排产方案校验器 - 排产方案领域模型
// ==========================================
// 职责: 定义方案文档中的输入（订单/设备/约束）与输出（生产批次）实体
// 红线: 实体只读，校验引擎不创建、不修改任何实体
// ==========================================

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductOrder - 产品订单（需求侧）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOrder {
    pub product_code: String, // 产品代码
    pub quantity_kg: f64,     // 需求量 (kg)
}

// ==========================================
// Equipment - 生产设备
// ==========================================
// 缺省值注入: min_capacity_kg / max_capacity_kg / product_codes 由导入层显式补齐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub equipment_id: String,       // 设备ID
    pub min_capacity_kg: f64,       // 单批最小装载 (kg)
    pub max_capacity_kg: f64,       // 单批最大装载 (kg)
    pub product_codes: Vec<String>, // 可生产产品代码（保持文档顺序，用于报错展示）
}

impl Equipment {
    /// 设备是否支持该产品
    pub fn supports(&self, product_code: &str) -> bool {
        self.product_codes.iter().any(|code| code == product_code)
    }
}

// ==========================================
// Downtime - 设备停机窗口
// ==========================================
// 时间在导入阶段已完成规范化，非法时间不会进入领域层
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Downtime {
    pub downtime_id: String,
    pub equipment_id: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

// ==========================================
// Holiday - 全厂假日（不区分设备）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub holiday_name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

// ==========================================
// ProductionBatch - 生产批次（供给侧）
// ==========================================
// start_time / end_time 保留原始字符串:
// 缺失与格式错误属于批次时间校验的报告范围，而非导入失败
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionBatch {
    pub batch_id: String,
    pub product_code: String,
    pub quantity_kg: f64,
    pub equipment_id: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

// ==========================================
// 方案聚合根
// ==========================================

/// 方案约束（停机 + 假日）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanConstraints {
    pub downtimes: Vec<Downtime>,
    pub holidays: Vec<Holiday>,
}

/// 方案输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    pub product_orders: Vec<ProductOrder>,
    pub equipment: Vec<Equipment>,
    pub constraints: PlanConstraints,
}

/// 方案输出
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanOutputs {
    pub production_batches: Vec<ProductionBatch>,
}

/// 排产方案（聚合根）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub inputs: PlanInputs,
    pub outputs: PlanOutputs,
}

impl Plan {
    pub fn orders(&self) -> &[ProductOrder] {
        &self.inputs.product_orders
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.inputs.equipment
    }

    pub fn downtimes(&self) -> &[Downtime] {
        &self.inputs.constraints.downtimes
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.inputs.constraints.holidays
    }

    pub fn batches(&self) -> &[ProductionBatch] {
        &self.outputs.production_batches
    }
}
