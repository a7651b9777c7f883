//! The twelve calculator inputs and their defaults.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::{Strategy, StrategyKind};

/// Snapshot of all twelve inputs: three probabilities and three QoL ratings
/// per strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionInputs {
    pub surgery_cure: Percentage,
    pub surgery_recur_treatable: Percentage,
    pub surgery_recur_untreatable: Percentage,
    pub wait_no_recur: Percentage,
    pub wait_recur_treatable: Percentage,
    pub wait_recur_untreatable: Percentage,
    pub qol_surgery_cure: Percentage,
    pub qol_surgery_recur_treatable: Percentage,
    pub qol_surgery_recur_untreatable: Percentage,
    pub qol_wait_no_recur: Percentage,
    pub qol_wait_recur_treatable: Percentage,
    pub qol_wait_recur_untreatable: Percentage,
}

impl DecisionInputs {
    /// Builds the strategy of the given kind from this snapshot.
    pub fn strategy(&self, kind: StrategyKind) -> Strategy {
        match kind {
            StrategyKind::Surgery => Strategy::new(
                kind,
                [
                    (self.surgery_cure, self.qol_surgery_cure),
                    (self.surgery_recur_treatable, self.qol_surgery_recur_treatable),
                    (self.surgery_recur_untreatable, self.qol_surgery_recur_untreatable),
                ],
            ),
            StrategyKind::Wait => Strategy::new(
                kind,
                [
                    (self.wait_no_recur, self.qol_wait_no_recur),
                    (self.wait_recur_treatable, self.qol_wait_recur_treatable),
                    (self.wait_recur_untreatable, self.qol_wait_recur_untreatable),
                ],
            ),
        }
    }

    /// Reads one input.
    pub fn get(&self, field: InputField) -> Percentage {
        let mut copy = *self;
        *copy.slot(field)
    }

    /// Overwrites one input.
    pub fn set(&mut self, field: InputField, value: Percentage) {
        *self.slot(field) = value;
    }

    /// Returns a copy with one input replaced.
    pub fn with(mut self, field: InputField, value: Percentage) -> Self {
        self.set(field, value);
        self
    }

    /// The only mapping from [`InputField`] to storage.
    fn slot(&mut self, field: InputField) -> &mut Percentage {
        match field {
            InputField::SurgeryCure => &mut self.surgery_cure,
            InputField::SurgeryRecurTreatable => &mut self.surgery_recur_treatable,
            InputField::SurgeryRecurUntreatable => &mut self.surgery_recur_untreatable,
            InputField::WaitNoRecur => &mut self.wait_no_recur,
            InputField::WaitRecurTreatable => &mut self.wait_recur_treatable,
            InputField::WaitRecurUntreatable => &mut self.wait_recur_untreatable,
            InputField::QolSurgeryCure => &mut self.qol_surgery_cure,
            InputField::QolSurgeryRecurTreatable => &mut self.qol_surgery_recur_treatable,
            InputField::QolSurgeryRecurUntreatable => &mut self.qol_surgery_recur_untreatable,
            InputField::QolWaitNoRecur => &mut self.qol_wait_no_recur,
            InputField::QolWaitRecurTreatable => &mut self.qol_wait_recur_treatable,
            InputField::QolWaitRecurUntreatable => &mut self.qol_wait_recur_untreatable,
        }
    }
}

impl Default for DecisionInputs {
    fn default() -> Self {
        let mut inputs = Self {
            surgery_cure: Percentage::ZERO,
            surgery_recur_treatable: Percentage::ZERO,
            surgery_recur_untreatable: Percentage::ZERO,
            wait_no_recur: Percentage::ZERO,
            wait_recur_treatable: Percentage::ZERO,
            wait_recur_untreatable: Percentage::ZERO,
            qol_surgery_cure: Percentage::ZERO,
            qol_surgery_recur_treatable: Percentage::ZERO,
            qol_surgery_recur_untreatable: Percentage::ZERO,
            qol_wait_no_recur: Percentage::ZERO,
            qol_wait_recur_treatable: Percentage::ZERO,
            qol_wait_recur_untreatable: Percentage::ZERO,
        };
        for field in InputField::all() {
            inputs.set(*field, field.default_value());
        }
        inputs
    }
}

/// Section an input is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputGroup {
    SurgeryProbabilities,
    WaitProbabilities,
    SurgeryQualityOfLife,
    WaitQualityOfLife,
}

impl InputGroup {
    /// Section heading.
    pub fn heading(&self) -> &'static str {
        match self {
            InputGroup::SurgeryProbabilities => "Immediate Surgery Probabilities",
            InputGroup::WaitProbabilities => "Watch and Monitor Probabilities",
            InputGroup::SurgeryQualityOfLife => "QoL for Surgery Outcomes",
            InputGroup::WaitQualityOfLife => "QoL for Watch Outcomes",
        }
    }
}

/// Identifies one of the twelve inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    SurgeryCure,
    SurgeryRecurTreatable,
    SurgeryRecurUntreatable,
    WaitNoRecur,
    WaitRecurTreatable,
    WaitRecurUntreatable,
    QolSurgeryCure,
    QolSurgeryRecurTreatable,
    QolSurgeryRecurUntreatable,
    QolWaitNoRecur,
    QolWaitRecurTreatable,
    QolWaitRecurUntreatable,
}

impl InputField {
    /// All inputs in form order.
    pub fn all() -> &'static [InputField] {
        &[
            InputField::SurgeryCure,
            InputField::SurgeryRecurTreatable,
            InputField::SurgeryRecurUntreatable,
            InputField::WaitNoRecur,
            InputField::WaitRecurTreatable,
            InputField::WaitRecurUntreatable,
            InputField::QolSurgeryCure,
            InputField::QolSurgeryRecurTreatable,
            InputField::QolSurgeryRecurUntreatable,
            InputField::QolWaitNoRecur,
            InputField::QolWaitRecurTreatable,
            InputField::QolWaitRecurUntreatable,
        ]
    }

    /// Looks up an input by its machine name.
    pub fn from_name(name: &str) -> Option<InputField> {
        InputField::all().iter().copied().find(|field| field.name() == name)
    }

    /// Machine name, matching the serialized field of [`DecisionInputs`].
    pub fn name(&self) -> &'static str {
        match self {
            InputField::SurgeryCure => "surgery_cure",
            InputField::SurgeryRecurTreatable => "surgery_recur_treatable",
            InputField::SurgeryRecurUntreatable => "surgery_recur_untreatable",
            InputField::WaitNoRecur => "wait_no_recur",
            InputField::WaitRecurTreatable => "wait_recur_treatable",
            InputField::WaitRecurUntreatable => "wait_recur_untreatable",
            InputField::QolSurgeryCure => "qol_surgery_cure",
            InputField::QolSurgeryRecurTreatable => "qol_surgery_recur_treatable",
            InputField::QolSurgeryRecurUntreatable => "qol_surgery_recur_untreatable",
            InputField::QolWaitNoRecur => "qol_wait_no_recur",
            InputField::QolWaitRecurTreatable => "qol_wait_recur_treatable",
            InputField::QolWaitRecurUntreatable => "qol_wait_recur_untreatable",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::SurgeryCure => "Cure after surgery (%)",
            InputField::SurgeryRecurTreatable => "Treatable recurrence (%)",
            InputField::SurgeryRecurUntreatable => "Untreatable recurrence (%)",
            InputField::WaitNoRecur => "No recurrence (%)",
            InputField::WaitRecurTreatable => "Treatable recurrence (%)",
            InputField::WaitRecurUntreatable => "Untreatable recurrence (%)",
            InputField::QolSurgeryCure => "QoL: Cured after surgery",
            InputField::QolSurgeryRecurTreatable => "QoL: Treatable recurrence after surgery",
            InputField::QolSurgeryRecurUntreatable => "QoL: Untreatable recurrence after surgery",
            InputField::QolWaitNoRecur => "QoL: No recurrence (no surgery)",
            InputField::QolWaitRecurTreatable => "QoL: Treatable recurrence (watch)",
            InputField::QolWaitRecurUntreatable => "QoL: Untreatable recurrence (watch)",
        }
    }

    /// Section the input belongs to.
    pub fn group(&self) -> InputGroup {
        match self {
            InputField::SurgeryCure
            | InputField::SurgeryRecurTreatable
            | InputField::SurgeryRecurUntreatable => InputGroup::SurgeryProbabilities,
            InputField::WaitNoRecur
            | InputField::WaitRecurTreatable
            | InputField::WaitRecurUntreatable => InputGroup::WaitProbabilities,
            InputField::QolSurgeryCure
            | InputField::QolSurgeryRecurTreatable
            | InputField::QolSurgeryRecurUntreatable => InputGroup::SurgeryQualityOfLife,
            InputField::QolWaitNoRecur
            | InputField::QolWaitRecurTreatable
            | InputField::QolWaitRecurUntreatable => InputGroup::WaitQualityOfLife,
        }
    }

    /// Built-in default value.
    pub fn default_value(&self) -> Percentage {
        let value = match self {
            InputField::SurgeryCure => 70,
            InputField::SurgeryRecurTreatable => 20,
            InputField::SurgeryRecurUntreatable => 10,
            InputField::WaitNoRecur => 50,
            InputField::WaitRecurTreatable => 30,
            InputField::WaitRecurUntreatable => 20,
            InputField::QolSurgeryCure => 60,
            InputField::QolSurgeryRecurTreatable => 40,
            InputField::QolSurgeryRecurUntreatable => 10,
            InputField::QolWaitNoRecur => 90,
            InputField::QolWaitRecurTreatable => 50,
            InputField::QolWaitRecurUntreatable => 10,
        };
        Percentage::new(value)
    }
}
