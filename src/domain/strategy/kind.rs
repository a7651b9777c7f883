//! Strategy and outcome identities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two top-level choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Operate now.
    Surgery,
    /// Watch and monitor, treat on recurrence.
    Wait,
}

impl StrategyKind {
    /// Returns both strategies in presentation order.
    pub fn all() -> &'static [StrategyKind] {
        &[StrategyKind::Surgery, StrategyKind::Wait]
    }

    /// Full name used on decision tree nodes.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Surgery => "Immediate Surgery",
            StrategyKind::Wait => "Watchful Waiting",
        }
    }

    /// Bar label on the comparison chart.
    pub fn chart_label(&self) -> &'static str {
        match self {
            StrategyKind::Surgery => "Immediate Surgery",
            StrategyKind::Wait => "Watch and Monitor",
        }
    }

    /// Graph node identifier.
    pub fn node_id(&self) -> &'static str {
        match self {
            StrategyKind::Surgery => "Surgery",
            StrategyKind::Wait => "Wait",
        }
    }

    /// Subject used when warning about this strategy's probabilities.
    pub fn warning_subject(&self) -> &'static str {
        match self {
            StrategyKind::Surgery => "Surgery",
            StrategyKind::Wait => "Watchful waiting",
        }
    }

    /// The three mutually exclusive outcomes, in input order.
    pub fn outcome_kinds(&self) -> [OutcomeKind; 3] {
        match self {
            StrategyKind::Surgery => [
                OutcomeKind::SurgeryCured,
                OutcomeKind::SurgeryTreatableRecurrence,
                OutcomeKind::SurgeryUntreatableRecurrence,
            ],
            StrategyKind::Wait => [
                OutcomeKind::WaitNoRecurrence,
                OutcomeKind::WaitTreatableRecurrence,
                OutcomeKind::WaitUntreatableRecurrence,
            ],
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A possible outcome of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    SurgeryCured,
    SurgeryTreatableRecurrence,
    SurgeryUntreatableRecurrence,
    WaitNoRecurrence,
    WaitTreatableRecurrence,
    WaitUntreatableRecurrence,
}

impl OutcomeKind {
    /// Short label shown on the outcome node.
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::SurgeryCured => "Cured",
            OutcomeKind::WaitNoRecurrence => "No Recurrence",
            OutcomeKind::SurgeryTreatableRecurrence | OutcomeKind::WaitTreatableRecurrence => {
                "Treatable Recurrence"
            }
            OutcomeKind::SurgeryUntreatableRecurrence | OutcomeKind::WaitUntreatableRecurrence => {
                "Untreatable"
            }
        }
    }

    /// Graph node identifier.
    pub fn node_id(&self) -> &'static str {
        match self {
            OutcomeKind::SurgeryCured => "Surg_Cured",
            OutcomeKind::SurgeryTreatableRecurrence => "Surg_Treatable",
            OutcomeKind::SurgeryUntreatableRecurrence => "Surg_Untreatable",
            OutcomeKind::WaitNoRecurrence => "Wait_NoRecur",
            OutcomeKind::WaitTreatableRecurrence => "Wait_Treatable",
            OutcomeKind::WaitUntreatableRecurrence => "Wait_Untreatable",
        }
    }
}
