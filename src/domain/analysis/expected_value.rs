//! Expected Value Calculator - probability-weighted QoL per strategy.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::strategy::{Outcome, Strategy};

/// Probability-weighted average QoL of a strategy.
///
/// Held as the exact integer weighted sum `Σ p_i × q_i`, so comparisons and
/// equality never suffer from float rounding. The score itself is that sum
/// divided by 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpectedValue {
    weighted_sum: u32,
}

impl ExpectedValue {
    /// Wraps a precomputed `Σ p_i × q_i`.
    pub fn from_weighted_sum(weighted_sum: u32) -> Self {
        Self { weighted_sum }
    }

    /// The raw weighted sum (score × 100).
    pub fn weighted_sum(&self) -> u32 {
        self.weighted_sum
    }

    /// The score on the QoL scale.
    pub fn value(&self) -> f64 {
        f64::from(self.weighted_sum) / 100.0
    }

    /// Absolute difference between two scores.
    pub fn distance(&self, other: ExpectedValue) -> f64 {
        f64::from(self.weighted_sum.abs_diff(other.weighted_sum)) / 100.0
    }
}

/// Displays with one decimal place, e.g. `50.0`.
impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

impl Serialize for ExpectedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Expected value computation.
pub struct ExpectedValueCalculator;

impl ExpectedValueCalculator {
    /// Computes `Σ probability_i × QoL_i / 100` over the strategy's outcomes.
    ///
    /// # Edge Cases
    /// - Probabilities not totalling 100: computed as given, no rescaling
    /// - All probabilities zero: score is 0
    pub fn compute(strategy: &Strategy) -> ExpectedValue {
        Self::compute_outcomes(strategy.outcomes())
    }

    /// Same as [`compute`](Self::compute) over an arbitrary outcome slice.
    pub fn compute_outcomes(outcomes: &[Outcome]) -> ExpectedValue {
        let weighted_sum = outcomes.iter().map(Outcome::weighted_quality).sum();
        ExpectedValue::from_weighted_sum(weighted_sum)
    }
}
