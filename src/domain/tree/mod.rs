//! Decision tree module - graph description of the decision.

mod builder;
mod decision_tree;

pub use builder::DecisionTreeBuilder;
pub use decision_tree::{
    DecisionTree, NodeKind, TreeEdge, TreeNode, ROOT_LABEL, ROOT_NODE_ID,
};
