//! Graphviz adapter - DOT output for the decision tree.

mod dot_renderer;

pub use dot_renderer::{DotTreeRenderer, DOT_CONTENT_TYPE};
