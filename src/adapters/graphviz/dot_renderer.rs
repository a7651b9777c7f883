//! Graphviz DOT renderer for the decision tree.
//!
//! Produces a `digraph` laid out left-to-right with filled box nodes. Any
//! Graphviz client (`dot -Tpng`, d3-graphviz, ...) can turn it into an image.

use crate::domain::tree::{DecisionTree, TreeNode};
use crate::ports::{RenderError, TreeRenderer};

/// MIME type registered for DOT documents.
pub const DOT_CONTENT_TYPE: &str = "text/vnd.graphviz; charset=utf-8";

const RANKDIR: &str = "LR";
const FONT_NAME: &str = "Helvetica";
const FONT_SIZE: u32 = 10;

/// DOT implementation of TreeRenderer.
#[derive(Debug, Clone, Default)]
pub struct DotTreeRenderer;

impl DotTreeRenderer {
    /// Creates a renderer with the left-to-right Helvetica layout.
    pub fn new() -> Self {
        Self
    }

    fn render_node(&self, node: &TreeNode) -> String {
        format!(
            "\t\"{}\" [label=\"{}\" fillcolor=\"{}\"]\n",
            escape(&node.id),
            escape(&node.label),
            node.fill_color()
        )
    }
}

impl TreeRenderer for DotTreeRenderer {
    fn content_type(&self) -> &'static str {
        DOT_CONTENT_TYPE
    }

    fn render(&self, tree: &DecisionTree) -> Result<String, RenderError> {
        if tree.nodes.is_empty() {
            return Err(RenderError::EmptyTree);
        }
        if let Some(edge) = tree.dangling_edge() {
            return Err(RenderError::dangling_edge(&edge.from, &edge.to));
        }

        let mut dot = String::from("digraph {\n");
        dot.push_str(&format!(
            "\tgraph [fontname=\"{FONT_NAME}\" fontsize=\"{FONT_SIZE}\" rankdir=\"{RANKDIR}\"]\n"
        ));
        dot.push_str(&format!(
            "\tnode [fontname=\"{FONT_NAME}\" shape=\"box\" style=\"filled\"]\n"
        ));

        for node in &tree.nodes {
            dot.push_str(&self.render_node(node));
        }
        for edge in &tree.edges {
            dot.push_str(&format!(
                "\t\"{}\" -> \"{}\"\n",
                escape(&edge.from),
                escape(&edge.to)
            ));
        }

        dot.push_str("}\n");
        Ok(dot)
    }
}

/// Escapes a value for use inside a double-quoted DOT string.
fn escape(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
