//! Analysis Module - Pure domain services for the treatment comparison.
//!
//! # Components
//!
//! - `ExpectedValueCalculator` - probability-weighted QoL per strategy
//! - `QolTier` - three-band classification of QoL ratings
//! - `ProbabilityCheck` - advisory check that probabilities total 100
//! - `Comparison` - which strategy scores higher
//! - `DecisionEvaluator` - one call from inputs to the full report
//!
//! All functions are pure and stateless. No ports or adapters needed since
//! there's no I/O.

mod comparison;
mod evaluator;
mod expected_value;
mod probability_check;
mod qol_tier;

pub use comparison::Comparison;
pub use evaluator::{DecisionEvaluator, EvaluationReport, StrategyEvaluation};
pub use expected_value::{ExpectedValue, ExpectedValueCalculator};
pub use probability_check::{ProbabilityCheck, ProbabilityWarning, EXPECTED_PROBABILITY_TOTAL};
pub use qol_tier::{QolTier, HIGH_QOL_THRESHOLD, MEDIUM_QOL_THRESHOLD};
