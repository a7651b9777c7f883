//! Outcome and Strategy entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::{OutcomeKind, StrategyKind};

/// A single possible outcome with its likelihood and desirability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub probability: Percentage,
    pub quality_of_life: Percentage,
}

impl Outcome {
    /// Creates a new outcome.
    pub fn new(kind: OutcomeKind, probability: Percentage, quality_of_life: Percentage) -> Self {
        Self {
            kind,
            probability,
            quality_of_life,
        }
    }

    /// Display label of the outcome.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// probability × QoL on the 0..=10_000 scale.
    pub fn weighted_quality(&self) -> u32 {
        self.probability.weighted_by(self.quality_of_life)
    }
}

/// A strategy with exactly three ordered outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub kind: StrategyKind,
    outcomes: [Outcome; 3],
}

impl Strategy {
    /// Builds a strategy from (probability, QoL) pairs given in the
    /// strategy's outcome order.
    pub fn new(kind: StrategyKind, values: [(Percentage, Percentage); 3]) -> Self {
        let kinds = kind.outcome_kinds();
        let outcomes = [
            Outcome::new(kinds[0], values[0].0, values[0].1),
            Outcome::new(kinds[1], values[1].0, values[1].1),
            Outcome::new(kinds[2], values[2].0, values[2].1),
        ];
        Self { kind, outcomes }
    }

    /// Display name of the strategy.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The outcomes in input order.
    pub fn outcomes(&self) -> &[Outcome; 3] {
        &self.outcomes
    }

    /// Sum of the outcome probabilities. Not clamped.
    pub fn probability_total(&self) -> u16 {
        Percentage::total(self.outcomes.iter().map(|o| &o.probability))
    }
}
