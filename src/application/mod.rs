//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read-only query: inputs in, derived results out.

pub mod handlers;

pub use handlers::{
    EvaluateDecisionHandler, EvaluateDecisionQuery, RenderComparisonChartHandler,
    RenderComparisonChartQuery, RenderDecisionTreeHandler, RenderDecisionTreeQuery,
    RenderedArtifact,
};
