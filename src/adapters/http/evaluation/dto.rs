//! HTTP DTOs for evaluation endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::analysis::{
    EvaluationReport, ExpectedValue, ProbabilityWarning, QolTier, StrategyEvaluation,
};
use crate::domain::chart::ComparisonChart;
use crate::domain::foundation::{DomainError, Percentage, ValidationError};
use crate::domain::strategy::{DecisionInputs, InputField, InputGroup, OutcomeKind, StrategyKind};
use crate::domain::tree::{DecisionTree, NodeKind, TreeNode};

/// Guidance shown alongside every evaluation.
pub const INTERPRETATION_NOTES: &[&str] = &[
    "Higher expected value = better average outcome based on your inputs.",
    "This is a simplified model. Always consult medical professionals.",
];

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters accepted by every evaluation endpoint, keyed by input name.
///
/// Values stay as text until [`EvaluationParams::into_inputs`] so that a bad
/// value is reported against the parameter it came from. Missing parameters
/// fall back to the configured defaults; unrelated parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EvaluationParams(pub HashMap<String, String>);

impl EvaluationParams {
    /// Overlays the supplied parameters on `defaults`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` for a value that is not an
    /// integer and `ValidationError::OutOfRange` for one outside 0..=100,
    /// both naming the parameter.
    pub fn into_inputs(self, defaults: DecisionInputs) -> Result<DecisionInputs, ValidationError> {
        let mut inputs = defaults;
        for &field in InputField::all() {
            let Some(raw) = self.0.get(field.name()) else {
                continue;
            };
            let value: i64 = raw.trim().parse().map_err(|_| {
                ValidationError::invalid_format(
                    field.name(),
                    format!("expected a whole number from 0 to 100, got '{}'", raw),
                )
            })?;
            inputs.set(field, Percentage::try_for_field(field.name(), value)?);
        }
        Ok(inputs)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Full evaluation result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub inputs: Vec<InputValueResult>,
    pub strategies: Vec<StrategyResult>,
    pub comparison: ComparisonResult,
    pub warnings: Vec<WarningResult>,
    pub tree: TreeResult,
    pub chart: ChartResult,
    pub interpretation: Vec<String>,
}

impl From<EvaluationReport> for EvaluationResponse {
    fn from(report: EvaluationReport) -> Self {
        let warnings = report.warnings().iter().map(WarningResult::from).collect();
        let strategies = vec![
            StrategyResult::from(&report.surgery),
            StrategyResult::from(&report.wait),
        ];
        let inputs = InputField::all()
            .iter()
            .map(|field| InputValueResult {
                name: field.name(),
                value: report.inputs.get(*field),
            })
            .collect();
        Self {
            inputs,
            strategies,
            comparison: ComparisonResult {
                preferred: report.comparison.preferred,
                margin: report.comparison.margin,
                summary: report.comparison.summary(),
            },
            warnings,
            tree: TreeResult::from(&report.tree),
            chart: ChartResult::from(&report.chart),
            interpretation: INTERPRETATION_NOTES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The value an evaluation used for one input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueResult {
    pub name: &'static str,
    pub value: Percentage,
}

/// One strategy's score and outcomes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub strategy: StrategyKind,
    pub name: String,
    pub expected_value: ExpectedValue,
    /// One decimal place, as shown in the tree
    pub expected_value_display: String,
    pub probability_total: u16,
    pub outcomes: Vec<OutcomeResult>,
}

impl From<&StrategyEvaluation> for StrategyResult {
    fn from(evaluation: &StrategyEvaluation) -> Self {
        Self {
            strategy: evaluation.strategy.kind,
            name: evaluation.strategy.name().to_string(),
            expected_value: evaluation.expected_value,
            expected_value_display: evaluation.expected_value.to_string(),
            probability_total: evaluation.strategy.probability_total(),
            outcomes: evaluation
                .strategy
                .outcomes()
                .iter()
                .map(|o| OutcomeResult {
                    kind: o.kind,
                    label: o.label().to_string(),
                    probability: o.probability,
                    quality_of_life: o.quality_of_life,
                    tier: QolTier::classify(o.quality_of_life),
                })
                .collect(),
        }
    }
}

/// A single outcome with its QoL tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeResult {
    pub kind: OutcomeKind,
    pub label: String,
    pub probability: Percentage,
    pub quality_of_life: Percentage,
    pub tier: QolTier,
}

/// Which strategy scores higher.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub preferred: Option<StrategyKind>,
    pub margin: f64,
    pub summary: String,
}

/// Probability-sum warning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningResult {
    pub strategy: StrategyKind,
    pub total: u16,
    pub message: String,
}

impl From<&ProbabilityWarning> for WarningResult {
    fn from(warning: &ProbabilityWarning) -> Self {
        Self {
            strategy: warning.strategy,
            total: warning.total,
            message: warning.message(),
        }
    }
}

/// Decision tree as nodes and edges.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeResult {
    pub nodes: Vec<TreeNodeResult>,
    pub edges: Vec<TreeEdgeResult>,
}

impl From<&DecisionTree> for TreeResult {
    fn from(tree: &DecisionTree) -> Self {
        Self {
            nodes: tree.nodes.iter().map(TreeNodeResult::from).collect(),
            edges: tree
                .edges
                .iter()
                .map(|e| TreeEdgeResult {
                    from: e.from.clone(),
                    to: e.to.clone(),
                })
                .collect(),
        }
    }
}

/// One tree node, with the colour it is drawn in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNodeResult {
    pub id: String,
    pub label: String,
    /// `root`, `strategy` or `outcome`
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<OutcomeKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<QolTier>,
    pub fill_color: &'static str,
}

impl From<&TreeNode> for TreeNodeResult {
    fn from(node: &TreeNode) -> Self {
        let (kind, strategy, outcome, tier) = match node.kind {
            NodeKind::Root => ("root", None, None, None),
            NodeKind::Strategy { strategy } => ("strategy", Some(strategy), None, None),
            NodeKind::Outcome { outcome, tier } => ("outcome", None, Some(outcome), Some(tier)),
        };
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            kind,
            strategy,
            outcome,
            tier,
            fill_color: node.fill_color(),
        }
    }
}

/// Parent to child link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeEdgeResult {
    pub from: String,
    pub to: String,
}

/// Comparison chart bars.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub title: String,
    pub max_value: ExpectedValue,
    pub bars: Vec<ChartBarResult>,
}

impl From<&ComparisonChart> for ChartResult {
    fn from(chart: &ComparisonChart) -> Self {
        Self {
            title: chart.title.clone(),
            max_value: chart.max_value(),
            bars: chart
                .bars
                .iter()
                .map(|bar| ChartBarResult {
                    strategy: bar.strategy,
                    label: bar.label.clone(),
                    value: bar.value,
                    value_display: bar.value.to_string(),
                })
                .collect(),
        }
    }
}

/// A single bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBarResult {
    pub strategy: StrategyKind,
    pub label: String,
    pub value: ExpectedValue,
    pub value_display: String,
}

/// Describes one input for form builders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub group: InputGroup,
    pub group_heading: &'static str,
    pub min: u8,
    pub max: u8,
    pub default: Percentage,
}

impl InputFieldDescriptor {
    /// Describes every input, using `defaults` for the default values.
    pub fn all(defaults: &DecisionInputs) -> Vec<Self> {
        InputField::all()
            .iter()
            .map(|field| Self {
                name: field.name(),
                label: field.label(),
                group: field.group(),
                group_heading: field.group().heading(),
                min: Percentage::ZERO.value(),
                max: Percentage::HUNDRED.value(),
                default: defaults.get(*field),
            })
            .collect()
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = (!err.details.is_empty()).then(|| serde_json::json!(err.details));
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::DecisionEvaluator;

    fn params(pairs: &[(&str, &str)]) -> EvaluationParams {
        EvaluationParams(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn empty_params_yield_defaults() {
        let defaults = DecisionInputs::default();
        let inputs = EvaluationParams::default().into_inputs(defaults).unwrap();
        assert_eq!(inputs, defaults);
    }

    #[test]
    fn supplied_params_override_defaults() {
        let inputs = params(&[("surgery_cure", "80"), ("qol_wait_no_recur", "0"), ("utm_source", "x")])
            .into_inputs(DecisionInputs::default())
            .unwrap();
        assert_eq!(inputs.surgery_cure.value(), 80);
        assert_eq!(inputs.qol_wait_no_recur.value(), 0);
        assert_eq!(inputs.surgery_recur_treatable.value(), 20);
    }

    #[test]
    fn out_of_range_param_names_field() {
        for raw in ["101", "300", "-1"] {
            let err = params(&[("qol_surgery_recur_untreatable", raw)])
                .into_inputs(DecisionInputs::default())
                .unwrap_err();
            assert!(matches!(err, ValidationError::OutOfRange { .. }), "{}", raw);
            assert_eq!(err.field(), "qol_surgery_recur_untreatable");
        }
    }

    #[test]
    fn non_numeric_param_names_field() {
        let err = params(&[("surgery_cure", "abc")])
            .into_inputs(DecisionInputs::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "surgery_cure");
    }

    #[test]
    fn params_deserialize_from_query_pairs() {
        let json = serde_json::json!({ "wait_no_recur": "40", "qol_wait_recur_treatable": "70" });
        let params: EvaluationParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.0.get("wait_no_recur").map(String::as_str), Some("40"));
        assert_eq!(params.0.get("qol_wait_recur_treatable").map(String::as_str), Some("70"));
        assert!(params.0.get("surgery_cure").is_none());
    }

    #[test]
    fn response_serializes_camel_case_with_warnings() {
        let inputs = DecisionInputs::default().with(InputField::SurgeryCure, Percentage::new(60));
        let response = EvaluationResponse::from(DecisionEvaluator::evaluate(&inputs));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["strategies"][0]["expectedValueDisplay"], "45.0");
        assert_eq!(json["strategies"][0]["probabilityTotal"], 90);
        assert_eq!(json["warnings"][0]["message"], "Surgery probabilities should total 100%.");
        assert_eq!(json["comparison"]["preferred"], "wait");
        assert_eq!(json["tree"]["nodes"].as_array().unwrap().len(), 9);
        assert_eq!(json["interpretation"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn nested_results_are_camel_case_with_fill_colors() {
        let response = EvaluationResponse::from(DecisionEvaluator::evaluate(&DecisionInputs::default()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["inputs"][0]["name"], "surgery_cure");
        assert_eq!(json["inputs"][0]["value"], 70);
        assert_eq!(json["inputs"].as_array().unwrap().len(), 12);

        let nodes = json["tree"]["nodes"].as_array().unwrap();
        assert_eq!(nodes[0]["kind"], "root");
        assert_eq!(nodes[0]["fillColor"], "lightblue");
        assert_eq!(nodes[1]["kind"], "strategy");
        assert_eq!(nodes[1]["fillColor"], "lightgrey");
        assert!(nodes.iter().all(|n| n.get("fill_color").is_none()));
        let outcome = nodes.iter().find(|n| n["kind"] == "outcome").unwrap();
        assert_eq!(outcome["id"], "Surg_Cured");
        assert_eq!(outcome["tier"], "medium");
        assert_eq!(outcome["fillColor"], "khaki");

        assert_eq!(json["tree"]["edges"][0]["from"], "Start");
        assert_eq!(json["chart"]["maxValue"], 62.0);
        assert_eq!(json["chart"]["bars"][1]["label"], "Watch and Monitor");
        assert_eq!(json["chart"]["bars"][1]["valueDisplay"], "62.0");
    }

    #[test]
    fn descriptors_cover_all_inputs_with_configured_defaults() {
        let defaults = DecisionInputs::default().with(InputField::SurgeryCure, Percentage::new(65));
        let descriptors = InputFieldDescriptor::all(&defaults);
        assert_eq!(descriptors.len(), 12);
        assert_eq!(descriptors[0].name, "surgery_cure");
        assert_eq!(descriptors[0].default.value(), 65);
        assert_eq!(descriptors[0].group_heading, "Immediate Surgery Probabilities");
        assert_eq!(descriptors[11].max, 100);
    }

    #[test]
    fn error_response_carries_code_and_field() {
        let err = DomainError::from(ValidationError::out_of_range("wait_no_recur", 0, 100, 120));
        let response = ErrorResponse::from(err);
        assert_eq!(response.code, "OUT_OF_RANGE");
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "field": "wait_no_recur" }))
        );
    }
}
