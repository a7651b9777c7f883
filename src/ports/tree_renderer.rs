//! Tree Renderer Port - turns a decision tree into a diagram document.
//!
//! The domain builds a `DecisionTree`; adapters (like `DotTreeRenderer`)
//! serialize it for a graph layout engine.

use thiserror::Error;

use crate::domain::tree::DecisionTree;

/// Port for rendering the decision tree.
///
/// # Contract
///
/// Implementations must:
/// - Emit every node and every edge of the tree
/// - Preserve node labels (including line breaks) and fill colours
/// - Be deterministic: the same tree always renders to the same text
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn TreeRenderer = get_renderer();
/// let dot = renderer.render(&report.tree)?;
/// ```
pub trait TreeRenderer: Send + Sync {
    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;

    /// Render the tree.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the tree is empty or an edge references a
    /// node that does not exist.
    fn render(&self, tree: &DecisionTree) -> Result<String, RenderError>;
}

/// Errors that can occur while rendering an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Tree has no nodes.
    #[error("Decision tree has no nodes")]
    EmptyTree,

    /// Edge endpoint missing from the node list.
    #[error("Edge {from} -> {to} references an unknown node")]
    DanglingEdge { from: String, to: String },

    /// Chart has no bars.
    #[error("Chart has no bars")]
    EmptyChart,

    /// Canvas too small to draw on.
    #[error("Chart dimensions {width}x{height} are below the minimum {min_width}x{min_height}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

impl RenderError {
    /// Creates a dangling edge error.
    pub fn dangling_edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::DanglingEdge {
            from: from.into(),
            to: to.into(),
        }
    }
}
