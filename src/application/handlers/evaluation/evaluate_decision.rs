//! EvaluateDecisionHandler - Query handler computing the full evaluation.
//!
//! Runs the pure domain evaluation and reports probability warnings to the
//! log. Stateless; every call recomputes from the query's inputs.

use tracing::{debug, warn};

use crate::domain::analysis::{DecisionEvaluator, EvaluationReport};
use crate::domain::strategy::DecisionInputs;

/// Query to evaluate one input snapshot.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionQuery {
    pub inputs: DecisionInputs,
}

/// Result of a successful evaluation.
pub type EvaluateDecisionResult = EvaluationReport;

/// Handler for evaluating the decision.
#[derive(Debug, Clone, Default)]
pub struct EvaluateDecisionHandler;

impl EvaluateDecisionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: EvaluateDecisionQuery) -> EvaluateDecisionResult {
        let report = DecisionEvaluator::evaluate(&query.inputs);

        for warning in report.warnings() {
            warn!(strategy = ?warning.strategy, "{}", warning);
        }

        debug!(
            surgery_ev = %report.surgery.expected_value,
            wait_ev = %report.wait.expected_value,
            preferred = ?report.comparison.preferred,
            "Evaluated decision"
        );

        report
    }
}
