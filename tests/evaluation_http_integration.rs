//! Integration tests for the evaluation HTTP endpoints.
//!
//! These tests drive the fully assembled router:
//! 1. JSON evaluation reflects the expected values and warnings
//! 2. Artifact endpoints return DOT and SVG with their content types
//! 3. Invalid inputs are rejected with a structured error

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use treatment_choice::adapters::http::{app_router, EvaluationAppState};
use treatment_choice::adapters::{DotTreeRenderer, SvgBarChartRenderer};
use treatment_choice::domain::foundation::Percentage;
use treatment_choice::domain::strategy::{DecisionInputs, InputField};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_defaults(defaults: DecisionInputs) -> Router {
    let state = EvaluationAppState::new(
        Arc::new(DotTreeRenderer::new()),
        Arc::new(SvgBarChartRenderer::default()),
        defaults,
    );
    app_router(state, &[])
}

fn app() -> Router {
    app_with_defaults(DecisionInputs::default())
}

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

async fn get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

// =============================================================================
// JSON evaluation
// =============================================================================

#[tokio::test]
async fn health_check_responds_ok() {
    let response = get(app(), "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn default_evaluation_scores_both_strategies() {
    let response = get(app(), "/api/evaluation").await;
    assert_eq!(response.status, StatusCode::OK);

    let json = response.json();
    let strategies = json["strategies"].as_array().unwrap();
    assert_eq!(strategies.len(), 2);

    assert_eq!(strategies[0]["strategy"], "surgery");
    assert_eq!(strategies[0]["expectedValue"], 51.0);
    assert_eq!(strategies[0]["expectedValueDisplay"], "51.0");
    assert_eq!(strategies[0]["probabilityTotal"], 100);

    assert_eq!(strategies[1]["strategy"], "wait");
    assert_eq!(strategies[1]["expectedValue"], 62.0);
    assert_eq!(strategies[1]["expectedValueDisplay"], "62.0");

    assert_eq!(json["comparison"]["preferred"], "wait");
    assert!(json["warnings"].as_array().unwrap().is_empty());
    assert_eq!(json["interpretation"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn evaluation_includes_tree_and_chart() {
    let json = get(app(), "/api/evaluation").await.json();

    assert_eq!(json["tree"]["nodes"].as_array().unwrap().len(), 9);
    assert_eq!(json["tree"]["edges"].as_array().unwrap().len(), 8);
    assert_eq!(json["chart"]["title"], "Expected Value by Strategy");
    assert_eq!(json["chart"]["bars"].as_array().unwrap().len(), 2);
    assert_eq!(json["chart"]["bars"][0]["valueDisplay"], "51.0");
}

#[tokio::test]
async fn tree_nodes_carry_fill_colors() {
    let json = get(app(), "/api/evaluation?qol_wait_no_recur=20").await.json();
    let nodes = json["tree"]["nodes"].as_array().unwrap();

    let color_of = |id: &str| {
        nodes
            .iter()
            .find(|n| n["id"] == id)
            .map(|n| n["fillColor"].clone())
            .unwrap()
    };
    assert_eq!(color_of("Start"), "lightblue");
    assert_eq!(color_of("Surgery"), "lightgrey");
    assert_eq!(color_of("Surg_Cured"), "khaki");
    assert_eq!(color_of("Wait_NoRecur"), "lightcoral");
    assert!(nodes.iter().all(|n| n.get("fill_color").is_none()));
}

#[tokio::test]
async fn unbalanced_probabilities_produce_warning_but_still_score() {
    let uri = "/api/evaluation?surgery_cure=50&surgery_recur_treatable=20&surgery_recur_untreatable=20";
    let response = get(app(), uri).await;
    assert_eq!(response.status, StatusCode::OK);

    let json = response.json();
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["strategy"], "surgery");
    assert_eq!(warnings[0]["total"], 90);
    assert_eq!(warnings[0]["message"], "Surgery probabilities should total 100%.");

    // 50*60 + 20*40 + 20*10 = 4000
    assert_eq!(json["strategies"][0]["expectedValue"], 40.0);
}

#[tokio::test]
async fn configured_defaults_fill_missing_parameters() {
    let defaults = DecisionInputs::default().with(InputField::QolWaitNoRecur, Percentage::new(50));
    let json = get(app_with_defaults(defaults), "/api/evaluation").await.json();

    // 50*50 + 30*50 + 20*10 = 4200
    assert_eq!(json["strategies"][1]["expectedValue"], 42.0);
    let qol_wait_no_recur = json["inputs"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == "qol_wait_no_recur")
        .unwrap();
    assert_eq!(qol_wait_no_recur["value"], 50);
    assert_eq!(json["comparison"]["preferred"], "surgery");
}

#[tokio::test]
async fn out_of_range_parameter_is_rejected() {
    for raw in ["101", "300", "-1"] {
        let response = get(app(), &format!("/api/evaluation?wait_no_recur={raw}")).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{raw}");

        let json = response.json();
        assert_eq!(json["code"], "OUT_OF_RANGE", "{raw}");
        assert_eq!(json["details"]["field"], "wait_no_recur", "{raw}");
    }
}

#[tokio::test]
async fn malformed_parameter_is_rejected_as_invalid_format() {
    let response = get(app(), "/api/evaluation?surgery_cure=abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let json = response.json();
    assert_eq!(json["code"], "INVALID_FORMAT");
    assert_eq!(json["details"]["field"], "surgery_cure");
}

// =============================================================================
// Artifacts
// =============================================================================

#[tokio::test]
async fn tree_endpoint_returns_graphviz() {
    let response = get(app(), "/api/evaluation/tree.dot").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.content_type.as_deref(),
        Some("text/vnd.graphviz; charset=utf-8")
    );
    assert!(response.body.starts_with("digraph {"));
    assert!(response.body.contains("EV: 51.0"));
    assert!(response.body.contains("EV: 62.0"));
    assert!(response.body.contains("\"Start\" -> \"Surgery\""));
}

#[tokio::test]
async fn chart_endpoint_returns_svg() {
    let response = get(app(), "/api/evaluation/chart.svg").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("image/svg+xml"));
    assert!(response.body.starts_with("<svg"));
    assert!(response.body.contains("Expected Value by Strategy"));
    assert!(response.body.contains("Watch and Monitor"));
}

#[tokio::test]
async fn artifact_endpoints_validate_parameters() {
    let response = get(app(), "/api/evaluation/chart.svg?qol_surgery_cure=200").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn input_descriptors_list_all_twelve_fields() {
    let response = get(app(), "/api/evaluation/inputs").await;
    assert_eq!(response.status, StatusCode::OK);

    let json = response.json();
    let fields = json.as_array().unwrap();
    assert_eq!(fields.len(), 12);
    assert_eq!(fields[0]["name"], "surgery_cure");
    assert_eq!(fields[0]["default"], 70);
    assert_eq!(fields[0]["groupHeading"], "Immediate Surgery Probabilities");
    assert_eq!(fields[11]["max"], 100);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get(app(), "/api/nothing").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
