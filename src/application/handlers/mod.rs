//! Application handlers.
//!
//! Query handlers that orchestrate domain operations and ports.

pub mod evaluation;

pub use evaluation::{
    EvaluateDecisionHandler, EvaluateDecisionQuery, EvaluateDecisionResult,
    RenderComparisonChartHandler, RenderComparisonChartQuery, RenderDecisionTreeHandler,
    RenderDecisionTreeQuery, RenderedArtifact,
};
