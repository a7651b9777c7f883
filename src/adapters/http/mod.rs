//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles every route with request tracing and optional CORS.

pub mod evaluation;

pub use evaluation::{evaluation_router, EvaluationAppState};

use ::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Builds the complete application router.
///
/// CORS is only installed when `cors_origins` is non-empty; origins that are
/// not valid header values are skipped with a warning.
pub fn app_router(state: EvaluationAppState, cors_origins: &[String]) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .merge(evaluation_router().with_state(state))
        .layer(TraceLayer::new_for_http());

    if !cors_origins.is_empty() {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        router = router.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET]),
        );
    }

    router
}
