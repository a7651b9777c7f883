//! Decision Tree Builder - structural mapping from evaluated strategies.

use crate::domain::analysis::{QolTier, StrategyEvaluation};
use crate::domain::strategy::Outcome;

use super::{DecisionTree, NodeKind, TreeEdge, TreeNode, ROOT_LABEL, ROOT_NODE_ID};

/// Builds the decision tree.
pub struct DecisionTreeBuilder;

impl DecisionTreeBuilder {
    /// Builds the tree for the given strategies.
    ///
    /// Shape: one root, one node per strategy (edge from root), one node per
    /// outcome (edge from its strategy). For two strategies of three
    /// outcomes each this is always 9 nodes and 8 edges.
    pub fn build(strategies: &[&StrategyEvaluation]) -> DecisionTree {
        let mut tree = DecisionTree::default();
        tree.nodes
            .push(TreeNode::new(ROOT_NODE_ID, ROOT_LABEL, NodeKind::Root));

        for evaluation in strategies {
            let kind = evaluation.strategy.kind;
            tree.nodes.push(TreeNode::new(
                kind.node_id(),
                Self::strategy_label(evaluation),
                NodeKind::Strategy { strategy: kind },
            ));
            tree.edges.push(TreeEdge::new(ROOT_NODE_ID, kind.node_id()));
        }

        for evaluation in strategies {
            let parent = evaluation.strategy.kind.node_id();
            for outcome in evaluation.strategy.outcomes() {
                tree.nodes.push(TreeNode::new(
                    outcome.kind.node_id(),
                    Self::outcome_label(outcome),
                    NodeKind::Outcome {
                        outcome: outcome.kind,
                        tier: QolTier::classify(outcome.quality_of_life),
                    },
                ));
                tree.edges.push(TreeEdge::new(parent, outcome.kind.node_id()));
            }
        }

        tree
    }

    /// "Immediate Surgery\nEV: 51.0"
    fn strategy_label(evaluation: &StrategyEvaluation) -> String {
        format!(
            "{}\nEV: {}",
            evaluation.strategy.name(),
            evaluation.expected_value
        )
    }

    /// "Cured\n70%, QoL 60"
    fn outcome_label(outcome: &Outcome) -> String {
        format!(
            "{}\n{}, QoL {}",
            outcome.label(),
            outcome.probability,
            outcome.quality_of_life.value()
        )
    }
}
