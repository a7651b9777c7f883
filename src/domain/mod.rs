//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (Percentage, errors)
//! - `strategy` - The two treatment strategies, their outcomes, and the inputs
//! - `analysis` - Expected value, QoL tiers, probability check, evaluation
//! - `tree` - Decision tree description
//! - `chart` - Comparison bar chart description

pub mod analysis;
pub mod chart;
pub mod foundation;
pub mod strategy;
pub mod tree;
