//! RenderDecisionTreeHandler - Query handler producing the tree diagram.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::DecisionEvaluator;
use crate::domain::strategy::DecisionInputs;
use crate::ports::{RenderError, TreeRenderer};

use super::RenderedArtifact;

/// Query to render the decision tree for one input snapshot.
#[derive(Debug, Clone)]
pub struct RenderDecisionTreeQuery {
    pub inputs: DecisionInputs,
}

/// Handler for rendering the decision tree.
pub struct RenderDecisionTreeHandler {
    renderer: Arc<dyn TreeRenderer>,
}

impl RenderDecisionTreeHandler {
    pub fn new(renderer: Arc<dyn TreeRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(&self, query: RenderDecisionTreeQuery) -> Result<RenderedArtifact, RenderError> {
        let report = DecisionEvaluator::evaluate(&query.inputs);
        let body = self.renderer.render(&report.tree)?;

        debug!(
            nodes = report.tree.node_count(),
            edges = report.tree.edge_count(),
            bytes = body.len(),
            "Rendered decision tree"
        );

        Ok(RenderedArtifact {
            content_type: self.renderer.content_type(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree::DecisionTree;

    struct CountingRenderer;

    impl TreeRenderer for CountingRenderer {
        fn content_type(&self) -> &'static str {
            "text/plain"
        }

        fn render(&self, tree: &DecisionTree) -> Result<String, RenderError> {
            Ok(format!("{} nodes, {} edges", tree.node_count(), tree.edge_count()))
        }
    }

    struct FailingRenderer;

    impl TreeRenderer for FailingRenderer {
        fn content_type(&self) -> &'static str {
            "text/plain"
        }

        fn render(&self, _tree: &DecisionTree) -> Result<String, RenderError> {
            Err(RenderError::EmptyTree)
        }
    }

    #[test]
    fn handle_passes_full_tree_to_renderer() {
        let handler = RenderDecisionTreeHandler::new(Arc::new(CountingRenderer));
        let artifact = handler
            .handle(RenderDecisionTreeQuery {
                inputs: DecisionInputs::default(),
            })
            .unwrap();
        assert_eq!(artifact.body, "9 nodes, 8 edges");
        assert_eq!(artifact.content_type, "text/plain");
    }

    #[test]
    fn handle_propagates_render_errors() {
        let handler = RenderDecisionTreeHandler::new(Arc::new(FailingRenderer));
        let result = handler.handle(RenderDecisionTreeQuery {
            inputs: DecisionInputs::default(),
        });
        assert_eq!(result.unwrap_err(), RenderError::EmptyTree);
    }
}
