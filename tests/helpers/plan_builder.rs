// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use plan_validator::domain::{
    Downtime, Equipment, Holiday, Plan, PlanConstraints, PlanInputs, PlanOutputs, ProductOrder,
    ProductionBatch,
};
use plan_validator::engine::{parse_timestamp, Instant};

/// 解析测试时间（必须合法）
pub fn ts(raw: &str) -> Instant {
    parse_timestamp(Some(raw))
        .expect("valid timestamp")
        .expect("present timestamp")
}

/// 基准日 2025-11-03 的整点时刻（UTC）
pub fn hour(h: u32) -> String {
    let day = 3 + h / 24;
    format!("2025-11-{:02}T{:02}:00:00Z", day, h % 24)
}

// ==========================================
// ProductionBatch 构建器
// ==========================================

pub struct BatchBuilder {
    batch: ProductionBatch,
}

impl BatchBuilder {
    pub fn new(batch_id: &str) -> Self {
        Self {
            batch: ProductionBatch {
                batch_id: batch_id.to_string(),
                product_code: "A".to_string(),
                quantity_kg: 100.0,
                equipment_id: "MIX-1".to_string(),
                start_time: Some(hour(0)),
                end_time: Some(hour(1)),
            },
        }
    }

    pub fn product(mut self, code: &str) -> Self {
        self.batch.product_code = code.to_string();
        self
    }

    pub fn quantity(mut self, qty: f64) -> Self {
        self.batch.quantity_kg = qty;
        self
    }

    pub fn equipment(mut self, eq: &str) -> Self {
        self.batch.equipment_id = eq.to_string();
        self
    }

    /// 整点区间 [start_h, end_h)
    pub fn hours(mut self, start_h: u32, end_h: u32) -> Self {
        self.batch.start_time = Some(hour(start_h));
        self.batch.end_time = Some(hour(end_h));
        self
    }

    pub fn start_raw(mut self, raw: Option<&str>) -> Self {
        self.batch.start_time = raw.map(str::to_string);
        self
    }

    pub fn end_raw(mut self, raw: Option<&str>) -> Self {
        self.batch.end_time = raw.map(str::to_string);
        self
    }

    pub fn build(self) -> ProductionBatch {
        self.batch
    }
}

// ==========================================
// Plan 构建器
// ==========================================

#[derive(Default)]
pub struct PlanBuilder {
    orders: Vec<ProductOrder>,
    equipment: Vec<Equipment>,
    downtimes: Vec<Downtime>,
    holidays: Vec<Holiday>,
    batches: Vec<ProductionBatch>,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, code: &str, qty: f64) -> Self {
        self.orders.push(ProductOrder {
            product_code: code.to_string(),
            quantity_kg: qty,
        });
        self
    }

    pub fn equipment(mut self, id: &str, min: f64, max: f64, codes: &[&str]) -> Self {
        self.equipment.push(Equipment {
            equipment_id: id.to_string(),
            min_capacity_kg: min,
            max_capacity_kg: max,
            product_codes: codes.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn downtime(mut self, id: &str, eq: &str, start_h: u32, end_h: u32) -> Self {
        self.downtimes.push(Downtime {
            downtime_id: id.to_string(),
            equipment_id: eq.to_string(),
            start_time: ts(&hour(start_h)),
            end_time: ts(&hour(end_h)),
        });
        self
    }

    pub fn holiday(mut self, name: &str, start_h: u32, end_h: u32) -> Self {
        self.holidays.push(Holiday {
            holiday_name: name.to_string(),
            start_time: ts(&hour(start_h)),
            end_time: ts(&hour(end_h)),
        });
        self
    }

    pub fn batch(mut self, batch: ProductionBatch) -> Self {
        self.batches.push(batch);
        self
    }

    pub fn build(self) -> Plan {
        Plan {
            inputs: PlanInputs {
                product_orders: self.orders,
                equipment: self.equipment,
                constraints: PlanConstraints {
                    downtimes: self.downtimes,
                    holidays: self.holidays,
                },
            },
            outputs: PlanOutputs {
                production_batches: self.batches,
            },
        }
    }
}
