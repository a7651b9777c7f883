//! Route configuration for evaluation endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_comparison_chart, get_decision_tree, get_evaluation, list_input_fields,
    EvaluationAppState,
};

/// Creates the evaluation router with all endpoints.
///
/// Routes:
/// - `GET /api/evaluation` - Expected values, warnings, tree and chart (JSON)
/// - `GET /api/evaluation/tree.dot` - Decision tree (Graphviz DOT)
/// - `GET /api/evaluation/chart.svg` - Comparison chart (SVG)
/// - `GET /api/evaluation/inputs` - Input field descriptors
pub fn evaluation_router() -> Router<EvaluationAppState> {
    Router::new()
        .route("/api/evaluation", get(get_evaluation))
        .route("/api/evaluation/tree.dot", get(get_decision_tree))
        .route("/api/evaluation/chart.svg", get(get_comparison_chart))
        .route("/api/evaluation/inputs", get(list_input_fields))
}
