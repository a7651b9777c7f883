//! HTTP handlers for evaluation endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    EvaluateDecisionHandler, EvaluateDecisionQuery, RenderComparisonChartHandler,
    RenderComparisonChartQuery, RenderDecisionTreeHandler, RenderDecisionTreeQuery,
    RenderedArtifact,
};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::strategy::DecisionInputs;
use crate::ports::{ChartRenderer, RenderError, TreeRenderer};

use super::dto::{ErrorResponse, EvaluationParams, EvaluationResponse, InputFieldDescriptor};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Evaluation API error that implements IntoResponse.
#[derive(Debug)]
pub enum EvaluationApiError {
    InvalidInput(ValidationError),
    Internal(DomainError),
}

impl IntoResponse for EvaluationApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            EvaluationApiError::InvalidInput(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::from(DomainError::from(err)),
            ),
            EvaluationApiError::Internal(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::from(err))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ValidationError> for EvaluationApiError {
    fn from(error: ValidationError) -> Self {
        EvaluationApiError::InvalidInput(error)
    }
}

impl From<RenderError> for EvaluationApiError {
    fn from(error: RenderError) -> Self {
        tracing::error!("Rendering failed: {}", error);
        EvaluationApiError::Internal(DomainError::new(
            ErrorCode::RenderFailed,
            format!("Rendering failed: {}", error),
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing evaluation dependencies.
#[derive(Clone)]
pub struct EvaluationAppState {
    pub tree_renderer: Arc<dyn TreeRenderer>,
    pub chart_renderer: Arc<dyn ChartRenderer>,
    /// Values used for inputs the request leaves out
    pub defaults: DecisionInputs,
}

impl EvaluationAppState {
    pub fn new(
        tree_renderer: Arc<dyn TreeRenderer>,
        chart_renderer: Arc<dyn ChartRenderer>,
        defaults: DecisionInputs,
    ) -> Self {
        Self {
            tree_renderer,
            chart_renderer,
            defaults,
        }
    }

    pub fn evaluate_handler(&self) -> EvaluateDecisionHandler {
        EvaluateDecisionHandler::new()
    }

    pub fn render_tree_handler(&self) -> RenderDecisionTreeHandler {
        RenderDecisionTreeHandler::new(self.tree_renderer.clone())
    }

    pub fn render_chart_handler(&self) -> RenderComparisonChartHandler {
        RenderComparisonChartHandler::new(self.chart_renderer.clone())
    }
}

/// Overlays the query string on the configured defaults.
fn request_inputs(
    params: Result<Query<EvaluationParams>, QueryRejection>,
    defaults: DecisionInputs,
) -> Result<DecisionInputs, EvaluationApiError> {
    let Query(params) = params
        .map_err(|rejection| ValidationError::invalid_format("query", rejection.body_text()))?;
    Ok(params.into_inputs(defaults)?)
}

fn artifact_response(artifact: RenderedArtifact) -> Response {
    ([(header::CONTENT_TYPE, artifact.content_type)], artifact.body).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/evaluation
///
/// Returns expected values, warnings, comparison, tree and chart as JSON.
pub async fn get_evaluation(
    State(state): State<EvaluationAppState>,
    params: Result<Query<EvaluationParams>, QueryRejection>,
) -> Result<Json<EvaluationResponse>, EvaluationApiError> {
    let inputs = request_inputs(params, state.defaults)?;

    let report = state
        .evaluate_handler()
        .handle(EvaluateDecisionQuery { inputs });

    Ok(Json(EvaluationResponse::from(report)))
}

/// GET /api/evaluation/tree.dot
///
/// Returns the decision tree as a Graphviz document.
pub async fn get_decision_tree(
    State(state): State<EvaluationAppState>,
    params: Result<Query<EvaluationParams>, QueryRejection>,
) -> Result<Response, EvaluationApiError> {
    let inputs = request_inputs(params, state.defaults)?;

    let artifact = state
        .render_tree_handler()
        .handle(RenderDecisionTreeQuery { inputs })?;

    Ok(artifact_response(artifact))
}

/// GET /api/evaluation/chart.svg
///
/// Returns the expected value comparison as an SVG bar chart.
pub async fn get_comparison_chart(
    State(state): State<EvaluationAppState>,
    params: Result<Query<EvaluationParams>, QueryRejection>,
) -> Result<Response, EvaluationApiError> {
    let inputs = request_inputs(params, state.defaults)?;

    let artifact = state
        .render_chart_handler()
        .handle(RenderComparisonChartQuery { inputs })?;

    Ok(artifact_response(artifact))
}

/// GET /api/evaluation/inputs
///
/// Describes the twelve inputs with their labels, ranges and defaults.
pub async fn list_input_fields(
    State(state): State<EvaluationAppState>,
) -> Json<Vec<InputFieldDescriptor>> {
    Json(InputFieldDescriptor::all(&state.defaults))
}
