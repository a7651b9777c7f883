//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Rendering Ports
//!
//! - `TreeRenderer` - Decision tree to diagram source (e.g. Graphviz DOT)
//! - `ChartRenderer` - Comparison chart to image (e.g. SVG)

mod chart_renderer;
mod tree_renderer;

pub use chart_renderer::ChartRenderer;
pub use tree_renderer::{RenderError, TreeRenderer};
