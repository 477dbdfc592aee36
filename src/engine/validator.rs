// ==========================================
// 生产排产方案校验器 - 校验编排器
// ==========================================
// 职责: 按固定顺序执行全部校验阶段，汇总违规，给出通过/失败结论
// 顺序: 批次时间 → 数量守恒 → 设备适配 → 停机/假日 → 设备重叠
// 红线: 收集全部违规，不去重、不提前返回
// ==========================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::domain::{Plan, PlanViolation, ViolationKind};
use crate::engine::batch_time::BatchTimeCheck;
use crate::engine::calendar_conflict::CalendarConflictCheck;
use crate::engine::equipment_overlap::EquipmentOverlapCheck;
use crate::engine::plan_check::PlanCheck;
use crate::engine::quantity::QuantityConservationCheck;
use crate::engine::sizing::EquipmentSizingCheck;

// ==========================================
// ValidationReport - 校验报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// 方案来源（文件名等，可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub valid: bool,
    pub batch_count: usize,
    pub violations: Vec<PlanViolation>,
}

impl ValidationReport {
    fn new(batch_count: usize, violations: Vec<PlanViolation>) -> Self {
        Self {
            source: None,
            valid: violations.is_empty(),
            batch_count,
            violations,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// 空违规列表 ⇔ 方案有效
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// 按输出顺序的可读消息
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }

    /// 按违规类型统计
    pub fn count_by_kind(&self) -> BTreeMap<ViolationKind, usize> {
        let mut counts = BTreeMap::new();
        for v in &self.violations {
            *counts.entry(v.kind).or_insert(0) += 1;
        }
        counts
    }

    /// 文本报告（首行结论 + 每条违规一行）
    pub fn render_text(&self) -> String {
        let source = self.source.as_deref().unwrap_or("<plan>");
        if self.is_valid() {
            return format!("VALIDATION PASSED with {}: No issues found.", source);
        }

        let mut lines = Vec::with_capacity(self.violations.len() + 1);
        lines.push(format!(
            "VALIDATION FAILED: Found the following issues: {}",
            source
        ));
        lines.extend(self.messages());
        lines.join("\n")
    }
}

// ==========================================
// PlanValidator - 校验编排器
// ==========================================
pub struct PlanValidator {
    checks: Vec<Box<dyn PlanCheck>>,
}

impl PlanValidator {
    /// 使用配置创建校验器（五个阶段，固定顺序）
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            checks: vec![
                Box::new(BatchTimeCheck),
                Box::new(QuantityConservationCheck::new(config.quantity_decimals)),
                Box::new(EquipmentSizingCheck),
                Box::new(CalendarConflictCheck),
                Box::new(EquipmentOverlapCheck),
            ],
        }
    }

    /// 阶段名称（按执行顺序）
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// 执行全部校验阶段
    pub fn validate(&self, plan: &Plan) -> ValidationReport {
        let batch_count = plan.batches().len();
        tracing::info!(batch_count, "开始校验排产方案");

        let mut violations = Vec::new();
        for check in &self.checks {
            let found = check.check(plan);
            tracing::debug!(check = check.name(), violations = found.len(), "校验阶段完成");
            violations.extend(found);
        }

        if violations.is_empty() {
            tracing::info!("排产方案校验通过");
        } else {
            tracing::info!(violations = violations.len(), "排产方案校验未通过");
        }

        ValidationReport::new(batch_count, violations)
    }
}

impl Default for PlanValidator {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

/// 纯函数入口: 方案 → 有序违规消息（默认配置）
pub fn validate(plan: &Plan) -> Vec<String> {
    PlanValidator::default().validate(plan).messages()
}
