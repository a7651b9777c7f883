//! Head-to-head comparison of the two strategies.

use serde::Serialize;

use super::StrategyEvaluation;
use crate::domain::strategy::StrategyKind;

/// Which strategy scores higher, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// Higher-scoring strategy; `None` on a tie
    pub preferred: Option<StrategyKind>,
    /// Absolute EV difference
    pub margin: f64,
}

impl Comparison {
    /// Compares two evaluated strategies.
    pub fn between(a: &StrategyEvaluation, b: &StrategyEvaluation) -> Self {
        let preferred = match a.expected_value.cmp(&b.expected_value) {
            std::cmp::Ordering::Greater => Some(a.strategy.kind),
            std::cmp::Ordering::Less => Some(b.strategy.kind),
            std::cmp::Ordering::Equal => None,
        };
        Self {
            preferred,
            margin: a.expected_value.distance(b.expected_value),
        }
    }

    /// One-line summary for display.
    pub fn summary(&self) -> String {
        match self.preferred {
            Some(kind) => format!(
                "{} has the higher expected value (by {:.1}).",
                kind.name(),
                self.margin
            ),
            None => "Both strategies have the same expected value.".to_string(),
        }
    }
}
