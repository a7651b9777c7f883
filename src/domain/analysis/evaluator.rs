//! Decision Evaluator - the pure `inputs -> results` entry point.

use serde::Serialize;

use super::{Comparison, ExpectedValue, ExpectedValueCalculator, ProbabilityCheck, ProbabilityWarning};
use crate::domain::chart::ComparisonChart;
use crate::domain::strategy::{DecisionInputs, Strategy, StrategyKind};
use crate::domain::tree::{DecisionTree, DecisionTreeBuilder};

/// A strategy with its score and optional probability warning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyEvaluation {
    pub strategy: Strategy,
    pub expected_value: ExpectedValue,
    pub warning: Option<ProbabilityWarning>,
}

/// Everything derived from one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub inputs: DecisionInputs,
    pub surgery: StrategyEvaluation,
    pub wait: StrategyEvaluation,
    pub comparison: Comparison,
    pub tree: DecisionTree,
    pub chart: ComparisonChart,
}

impl EvaluationReport {
    /// Probability warnings, surgery first.
    pub fn warnings(&self) -> Vec<ProbabilityWarning> {
        [&self.surgery, &self.wait]
            .iter()
            .filter_map(|e| e.warning)
            .collect()
    }
}

/// Stateless evaluation functions.
pub struct DecisionEvaluator;

impl DecisionEvaluator {
    /// Computes expected values, warnings, comparison, tree, and chart.
    ///
    /// Pure and idempotent: the same inputs always yield an equal report.
    /// Never fails; probability warnings are advisory only.
    pub fn evaluate(inputs: &DecisionInputs) -> EvaluationReport {
        let surgery = Self::evaluate_strategy(inputs.strategy(StrategyKind::Surgery));
        let wait = Self::evaluate_strategy(inputs.strategy(StrategyKind::Wait));

        let comparison = Comparison::between(&surgery, &wait);
        let tree = Self::build_tree(&surgery, &wait);
        let chart = ComparisonChart::from_evaluations(&[&surgery, &wait]);

        EvaluationReport {
            inputs: *inputs,
            surgery,
            wait,
            comparison,
            tree,
            chart,
        }
    }

    /// Scores a single strategy and checks its distribution.
    pub fn evaluate_strategy(strategy: Strategy) -> StrategyEvaluation {
        let expected_value = ExpectedValueCalculator::compute(&strategy);
        let warning = ProbabilityCheck::check(&strategy);
        StrategyEvaluation {
            strategy,
            expected_value,
            warning,
        }
    }

    fn build_tree(surgery: &StrategyEvaluation, wait: &StrategyEvaluation) -> DecisionTree {
        DecisionTreeBuilder::build(&[surgery, wait])
    }
}
