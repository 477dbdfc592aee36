// ==========================================
// 生产排产方案校验器 - 方案加载器
// ==========================================
// 职责: 读取 JSON 文档 → 原始结构 → 带校验的领域实体构造
// 流程: 文件读取 → JSON 解析 → 必填校验（收集全部缺陷）→ 缺省值注入
// 红线: 存在任一结构缺陷即整体失败，不把残缺方案交给校验引擎
// ==========================================

use std::path::Path;

use crate::config::ValidatorConfig;
use crate::domain::{
    Downtime, Equipment, Holiday, Plan, PlanConstraints, PlanInputs, PlanOutputs, ProductOrder,
    ProductionBatch,
};
use crate::engine::time_core::{parse_timestamp, Instant};
use crate::importer::error::{ImportError, ImportResult, MalformedRecord};
use crate::importer::raw_document::{
    RawDowntime, RawEquipment, RawHoliday, RawNumber, RawPlanDocument, RawProductOrder,
    RawProductionBatch,
};

const ORDERS: &str = "inputs.product_orders";
const EQUIPMENT: &str = "inputs.equipment";
const DOWNTIMES: &str = "inputs.constraints.downtimes";
const HOLIDAYS: &str = "inputs.constraints.holidays";
const BATCHES: &str = "outputs.production_batches";

const MISSING_FIELD: &str = "missing required field";

// ==========================================
// RecordCollector - 结构缺陷收集器
// ==========================================
#[derive(Default)]
struct RecordCollector {
    findings: Vec<MalformedRecord>,
}

impl RecordCollector {
    fn flag(&mut self, collection: &str, index: usize, field: &str, reason: impl Into<String>) {
        self.findings.push(MalformedRecord {
            collection: collection.to_string(),
            index,
            field: field.to_string(),
            reason: reason.into(),
        });
    }

    /// 必填字段: 缺失时记录缺陷并返回 None
    fn require<T>(
        &mut self,
        value: Option<T>,
        collection: &str,
        index: usize,
        field: &str,
    ) -> Option<T> {
        if value.is_none() {
            self.flag(collection, index, field, MISSING_FIELD);
        }
        value
    }

    /// 可选数值字段: 存在但无法转换时记录缺陷
    fn number(
        &mut self,
        raw: Option<RawNumber>,
        collection: &str,
        index: usize,
        field: &str,
    ) -> Option<Result<f64, ()>> {
        raw.map(|value| {
            value.to_f64().map_err(|reason| {
                self.flag(collection, index, field, reason);
            })
        })
    }

    /// 必填数值字段
    fn require_number(
        &mut self,
        raw: Option<RawNumber>,
        collection: &str,
        index: usize,
        field: &str,
    ) -> Option<f64> {
        let value = self.require(raw, collection, index, field)?;
        self.number(Some(value), collection, index, field)?.ok()
    }

    /// 必填时间字段: 缺失或格式非法时记录缺陷
    fn require_instant(
        &mut self,
        raw: Option<&str>,
        collection: &str,
        index: usize,
        field: &str,
    ) -> Option<Instant> {
        match parse_timestamp(raw) {
            Ok(Some(instant)) => Some(instant),
            Ok(None) => {
                self.flag(collection, index, field, MISSING_FIELD);
                None
            }
            Err(err) => {
                self.flag(collection, index, field, err.to_string());
                None
            }
        }
    }
}

// ==========================================
// PlanLoader - 方案加载器
// ==========================================
pub struct PlanLoader {
    default_min_capacity_kg: f64,
    default_max_capacity_kg: f64,
}

impl PlanLoader {
    /// 创建加载器（设备容量缺省值取自配置）
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            default_min_capacity_kg: config.default_min_capacity_kg,
            default_max_capacity_kg: config.default_max_capacity_kg,
        }
    }

    /// 从文件加载方案
    pub fn load_file(&self, path: &Path) -> ImportResult<Plan> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "方案文件已读取");
        self.load_str(&content)
    }

    /// 从 JSON 文本加载方案
    pub fn load_str(&self, content: &str) -> ImportResult<Plan> {
        let raw: RawPlanDocument = serde_json::from_str(content)?;
        self.from_raw(raw)
    }

    /// 原始文档 → 领域方案（收集全部结构缺陷后统一返回）
    pub fn from_raw(&self, raw: RawPlanDocument) -> ImportResult<Plan> {
        let mut collector = RecordCollector::default();

        let product_orders = collect_records(raw.inputs.product_orders, |i, r| {
            Self::convert_order(&mut collector, i, r)
        });
        let equipment = collect_records(raw.inputs.equipment, |i, r| {
            self.convert_equipment(&mut collector, i, r)
        });
        let downtimes = collect_records(raw.inputs.constraints.downtimes, |i, r| {
            Self::convert_downtime(&mut collector, i, r)
        });
        let holidays = collect_records(raw.inputs.constraints.holidays, |i, r| {
            Self::convert_holiday(&mut collector, i, r)
        });
        let production_batches = collect_records(raw.outputs.production_batches, |i, r| {
            Self::convert_batch(&mut collector, i, r)
        });

        if !collector.findings.is_empty() {
            tracing::warn!(count = collector.findings.len(), "方案文档存在结构缺陷");
            return Err(ImportError::MalformedRecords(collector.findings));
        }

        tracing::debug!(
            orders = product_orders.len(),
            equipment = equipment.len(),
            downtimes = downtimes.len(),
            holidays = holidays.len(),
            batches = production_batches.len(),
            "方案文档加载完成"
        );

        Ok(Plan {
            inputs: PlanInputs {
                product_orders,
                equipment,
                constraints: PlanConstraints {
                    downtimes,
                    holidays,
                },
            },
            outputs: PlanOutputs { production_batches },
        })
    }

    fn convert_order(
        c: &mut RecordCollector,
        index: usize,
        raw: RawProductOrder,
    ) -> Option<ProductOrder> {
        let product_code = c.require(raw.product_code, ORDERS, index, "product_code");
        let quantity_kg = c.require_number(raw.quantity_kg, ORDERS, index, "quantity_kg");

        Some(ProductOrder {
            product_code: product_code?,
            quantity_kg: quantity_kg?,
        })
    }

    /// 设备: 仅 equipment_id 必填，容量与产品列表显式注入缺省值
    fn convert_equipment(
        &self,
        c: &mut RecordCollector,
        index: usize,
        raw: RawEquipment,
    ) -> Option<Equipment> {
        let equipment_id = c.require(raw.equipment_id, EQUIPMENT, index, "equipment_id")?;

        let min_capacity_kg = c
            .number(raw.min_capacity_kg, EQUIPMENT, index, "min_capacity_kg")
            .unwrap_or_else(|| {
                tracing::debug!(equipment_id = %equipment_id, default = self.default_min_capacity_kg, "min_capacity_kg 缺省");
                Ok(self.default_min_capacity_kg)
            });
        let max_capacity_kg = c
            .number(raw.max_capacity_kg, EQUIPMENT, index, "max_capacity_kg")
            .unwrap_or_else(|| {
                tracing::debug!(equipment_id = %equipment_id, default = self.default_max_capacity_kg, "max_capacity_kg 缺省");
                Ok(self.default_max_capacity_kg)
            });
        let product_codes = raw.product_codes.unwrap_or_else(|| {
            tracing::debug!(equipment_id = %equipment_id, "product_codes 缺省为空");
            Vec::new()
        });

        Some(Equipment {
            equipment_id,
            min_capacity_kg: min_capacity_kg.ok()?,
            max_capacity_kg: max_capacity_kg.ok()?,
            product_codes,
        })
    }

    fn convert_downtime(
        c: &mut RecordCollector,
        index: usize,
        raw: RawDowntime,
    ) -> Option<Downtime> {
        let downtime_id = c.require(raw.downtime_id, DOWNTIMES, index, "downtime_id");
        let equipment_id = c.require(raw.equipment_id, DOWNTIMES, index, "equipment_id");
        let start_time = c.require_instant(raw.start_time.as_deref(), DOWNTIMES, index, "start_time");
        let end_time = c.require_instant(raw.end_time.as_deref(), DOWNTIMES, index, "end_time");

        Some(Downtime {
            downtime_id: downtime_id?,
            equipment_id: equipment_id?,
            start_time: start_time?,
            end_time: end_time?,
        })
    }

    fn convert_holiday(c: &mut RecordCollector, index: usize, raw: RawHoliday) -> Option<Holiday> {
        let holiday_name = c.require(raw.holiday_name, HOLIDAYS, index, "holiday_name");
        let start_time = c.require_instant(raw.start_time.as_deref(), HOLIDAYS, index, "start_time");
        let end_time = c.require_instant(raw.end_time.as_deref(), HOLIDAYS, index, "end_time");

        Some(Holiday {
            holiday_name: holiday_name?,
            start_time: start_time?,
            end_time: end_time?,
        })
    }

    /// 批次: 时间字段保持原始值，由批次时间校验负责报告
    fn convert_batch(
        c: &mut RecordCollector,
        index: usize,
        raw: RawProductionBatch,
    ) -> Option<ProductionBatch> {
        let batch_id = c.require(raw.batch_id, BATCHES, index, "batch_id");
        let product_code = c.require(raw.product_code, BATCHES, index, "product_code");
        let quantity_kg = c.require_number(raw.quantity_kg, BATCHES, index, "quantity_kg");
        let equipment_id = c.require(raw.equipment_id, BATCHES, index, "equipment_id");

        Some(ProductionBatch {
            batch_id: batch_id?,
            product_code: product_code?,
            quantity_kg: quantity_kg?,
            equipment_id: equipment_id?,
            start_time: raw.start_time,
            end_time: raw.end_time,
        })
    }
}

impl Default for PlanLoader {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

/// 逐条转换，转换失败的记录丢弃（缺陷已记录在收集器中）
fn collect_records<R, T>(
    records: Vec<R>,
    mut convert: impl FnMut(usize, R) -> Option<T>,
) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, r)| convert(i, r))
        .collect()
}
