//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `graphviz` - Decision tree as Graphviz DOT
//! - `chart` - Comparison chart as SVG
//! - `http` - REST endpoints (axum)

pub mod chart;
pub mod graphviz;
pub mod http;

pub use chart::SvgBarChartRenderer;
pub use graphviz::DotTreeRenderer;
