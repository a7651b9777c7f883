//! Comparison chart view model: one bar per strategy.

use serde::Serialize;

use crate::domain::analysis::{ExpectedValue, StrategyEvaluation};
use crate::domain::strategy::StrategyKind;

/// Title shown above the bars.
pub const CHART_TITLE: &str = "Expected Value by Strategy";

/// A single bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub strategy: StrategyKind,
    pub label: String,
    pub value: ExpectedValue,
}

/// Bar chart comparing strategy expected values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub title: String,
    pub bars: Vec<ChartBar>,
}

impl ComparisonChart {
    /// One bar per evaluation, in the given order.
    pub fn from_evaluations(evaluations: &[&StrategyEvaluation]) -> Self {
        let bars = evaluations
            .iter()
            .map(|evaluation| ChartBar {
                strategy: evaluation.strategy.kind,
                label: evaluation.strategy.kind.chart_label().to_string(),
                value: evaluation.expected_value,
            })
            .collect();
        Self {
            title: CHART_TITLE.to_string(),
            bars,
        }
    }

    /// Largest bar value, or zero for an empty chart.
    pub fn max_value(&self) -> ExpectedValue {
        self.bars
            .iter()
            .map(|b| b.value)
            .max()
            .unwrap_or_default()
    }
}
