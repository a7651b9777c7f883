//! Decision tree view model.
//!
//! A fixed two-level graph: the decision, the two strategies, and three
//! outcomes per strategy. Renderers turn it into DOT, JSON, etc.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::QolTier;
use crate::domain::strategy::{OutcomeKind, StrategyKind};

/// Identifier of the root node.
pub const ROOT_NODE_ID: &str = "Start";

/// Label of the root node.
pub const ROOT_LABEL: &str = "Decision: Surgery vs Wait";

// ════════════════════════════════════════════════════════════════════════════════
// Nodes
// ════════════════════════════════════════════════════════════════════════════════

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// The decision itself
    Root,
    /// A strategy branch
    Strategy { strategy: StrategyKind },
    /// A terminal outcome, coloured by QoL tier
    Outcome { outcome: OutcomeKind, tier: QolTier },
}

impl NodeKind {
    /// Fill colour for the node.
    pub fn fill_color(&self) -> &'static str {
        match self {
            NodeKind::Root => "lightblue",
            NodeKind::Strategy { .. } => "lightgrey",
            NodeKind::Outcome { tier, .. } => tier.fill_color(),
        }
    }
}

/// A node in the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Stable identifier, unique within the tree
    pub id: String,
    /// Multi-line label; lines separated by `\n`
    pub label: String,
    pub kind: NodeKind,
}

impl TreeNode {
    /// Creates a new node.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    /// Fill colour for the node.
    pub fn fill_color(&self) -> &'static str {
        self.kind.fill_color()
    }
}

/// A directed parent → child edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
}

impl TreeEdge {
    /// Creates a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tree
// ════════════════════════════════════════════════════════════════════════════════

/// Node/edge description of the decision tree.
///
/// Nodes are ordered parents-first, so every edge points from an earlier
/// node to a later one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<TreeEdge>,
}

impl DecisionTree {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First edge that references a missing node, if any.
    pub fn dangling_edge(&self) -> Option<&TreeEdge> {
        self.edges
            .iter()
            .find(|e| self.node(&e.from).is_none() || self.node(&e.to).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::new(ROOT_NODE_ID, ROOT_LABEL, NodeKind::Root),
                TreeNode::new(
                    "Wait",
                    "Watchful Waiting\nEV: 62.0",
                    NodeKind::Strategy {
                        strategy: StrategyKind::Wait,
                    },
                ),
            ],
            edges: vec![TreeEdge::new(ROOT_NODE_ID, "Wait")],
        }
    }

    #[test]
    fn node_lookup_by_id() {
        let tree = small_tree();
        assert_eq!(tree.node(ROOT_NODE_ID).unwrap().kind, NodeKind::Root);
        assert!(tree.node("Surgery").is_none());
    }

    #[test]
    fn dangling_edge_is_reported() {
        let mut tree = small_tree();
        assert!(tree.dangling_edge().is_none());
        tree.edges.push(TreeEdge::new("Wait", "Nowhere"));
        assert_eq!(tree.dangling_edge(), Some(&TreeEdge::new("Wait", "Nowhere")));
    }

    #[test]
    fn fill_colors_by_kind() {
        assert_eq!(NodeKind::Root.fill_color(), "lightblue");
        assert_eq!(
            NodeKind::Strategy {
                strategy: StrategyKind::Surgery
            }
            .fill_color(),
            "lightgrey"
        );
        assert_eq!(
            NodeKind::Outcome {
                outcome: OutcomeKind::SurgeryCured,
                tier: QolTier::Low
            }
            .fill_color(),
            "lightcoral"
        );
    }

    #[test]
    fn strategy_label_has_name_and_value_lines() {
        let tree = small_tree();
        assert_eq!(tree.node("Wait").unwrap().label, "Watchful Waiting\nEV: 62.0");
    }

    #[test]
    fn node_kind_serializes_tagged() {
        let json = serde_json::to_value(NodeKind::Outcome {
            outcome: OutcomeKind::WaitNoRecurrence,
            tier: QolTier::High,
        })
        .unwrap();
        assert_eq!(json["type"], "outcome");
        assert_eq!(json["outcome"], "wait_no_recurrence");
        assert_eq!(json["tier"], "high");
    }
}
