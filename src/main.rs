//! Treatment Choice server
//!
//! Run with: cargo run

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use treatment_choice::adapters::http::{app_router, EvaluationAppState};
use treatment_choice::adapters::{DotTreeRenderer, SvgBarChartRenderer};
use treatment_choice::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let defaults = config.inputs.to_decision_inputs()?;
    let state = EvaluationAppState::new(
        Arc::new(DotTreeRenderer::new()),
        Arc::new(SvgBarChartRenderer::new(config.chart.width, config.chart.height)),
        defaults,
    );
    let app = app_router(state, &config.cors_origins());

    let addr = config.server.socket_addr()?;
    info!("Treatment Choice listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.features.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
