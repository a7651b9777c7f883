//! Evaluation query handlers.

mod evaluate_decision;
mod render_comparison_chart;
mod render_decision_tree;

pub use evaluate_decision::{EvaluateDecisionHandler, EvaluateDecisionQuery, EvaluateDecisionResult};
pub use render_comparison_chart::{RenderComparisonChartHandler, RenderComparisonChartQuery};
pub use render_decision_tree::{RenderDecisionTreeHandler, RenderDecisionTreeQuery};

/// A rendered document together with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub content_type: &'static str,
    pub body: String,
}
