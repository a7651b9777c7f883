//! Strategy module - the two treatment choices and their outcomes.

mod inputs;
mod kind;
mod outcome;

pub use inputs::{DecisionInputs, InputField, InputGroup};
pub use kind::{OutcomeKind, StrategyKind};
pub use outcome::{Outcome, Strategy};
