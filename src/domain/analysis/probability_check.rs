//! Advisory check that a strategy's probabilities form a full distribution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::strategy::{Strategy, StrategyKind};

/// Total a strategy's outcome probabilities are expected to reach.
pub const EXPECTED_PROBABILITY_TOTAL: u16 = 100;

/// Non-blocking warning: probabilities do not total 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityWarning {
    pub strategy: StrategyKind,
    pub total: u16,
}

impl ProbabilityWarning {
    /// User-facing message.
    pub fn message(&self) -> String {
        format!(
            "{} probabilities should total 100%.",
            self.strategy.warning_subject()
        )
    }
}

impl fmt::Display for ProbabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (currently {}%)", self.message(), self.total)
    }
}

/// Probability sum validation.
pub struct ProbabilityCheck;

impl ProbabilityCheck {
    /// Returns a warning iff the probabilities do not sum to exactly 100.
    ///
    /// Inputs are integers, so the comparison is exact.
    pub fn check(strategy: &Strategy) -> Option<ProbabilityWarning> {
        let total = strategy.probability_total();
        if total == EXPECTED_PROBABILITY_TOTAL {
            return None;
        }
        Some(ProbabilityWarning {
            strategy: strategy.kind,
            total,
        })
    }
}
