// ==========================================
// 生产排产方案校验器 - 数量守恒校验
// ==========================================
// 规则:
// - 按产品代码汇总订单量与批次量（缺失一侧视为 0）
// - 两侧汇总按固定十进制位数舍入后必须完全相等
// - 产品代码按字典序输出，保证结果可复现
// ==========================================

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Plan, PlanViolation, ViolationKind};
use crate::engine::plan_check::PlanCheck;
use crate::engine::time_core::{format_kg, round_decimal};

/// 默认舍入位数
pub const DEFAULT_QUANTITY_DECIMALS: u32 = 9;

pub struct QuantityConservationCheck {
    decimals: u32,
}

impl QuantityConservationCheck {
    pub fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// 按产品代码累加（保持文档顺序累加，避免浮点求和顺序差异）
    fn sum_by_product<'a>(
        items: impl Iterator<Item = (&'a str, f64)>,
    ) -> BTreeMap<&'a str, f64> {
        let mut sums = BTreeMap::new();
        for (code, qty) in items {
            *sums.entry(code).or_insert(0.0) += qty;
        }
        sums
    }
}

impl Default for QuantityConservationCheck {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTITY_DECIMALS)
    }
}

impl PlanCheck for QuantityConservationCheck {
    fn name(&self) -> &'static str {
        "quantity_conservation"
    }

    fn check(&self, plan: &Plan) -> Vec<PlanViolation> {
        let orders_sum = Self::sum_by_product(
            plan.orders()
                .iter()
                .map(|o| (o.product_code.as_str(), o.quantity_kg)),
        );
        let batches_sum = Self::sum_by_product(
            plan.batches()
                .iter()
                .map(|b| (b.product_code.as_str(), b.quantity_kg)),
        );

        let all_products: BTreeSet<&str> =
            orders_sum.keys().chain(batches_sum.keys()).copied().collect();

        let mut violations = Vec::new();
        for product in all_products {
            let ordered = round_decimal(
                orders_sum.get(product).copied().unwrap_or(0.0),
                self.decimals,
            );
            let produced = round_decimal(
                batches_sum.get(product).copied().unwrap_or(0.0),
                self.decimals,
            );

            if ordered != produced {
                violations.push(
                    PlanViolation::new(
                        ViolationKind::QuantityMismatch,
                        format!(
                            "ERROR: Quantity mismatch for product {}: orders={} kg vs batches={} kg.",
                            product,
                            format_kg(ordered),
                            format_kg(produced)
                        ),
                    )
                    .with_product(product),
                );
            }
        }

        violations
    }
}
