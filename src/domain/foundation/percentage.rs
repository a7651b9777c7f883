//! Percentage value object (0-100 scale).
//!
//! Every input of the calculator (outcome probabilities and quality-of-life
//! ratings) lives on this scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Creates a Percentage for a named input, returning an error naming
    /// the field if the raw value is outside 0..=100.
    pub fn try_for_field(field: &str, value: i64) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(ValidationError::out_of_range(field, 0, 100, value)),
        }
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Product of two percentages on the 0..=10_000 scale.
    pub fn weighted_by(&self, other: Percentage) -> u32 {
        u32::from(self.0) * u32::from(other.0)
    }

    /// Sums percentages without clamping; the result may exceed 100.
    pub fn total<'a>(values: impl IntoIterator<Item = &'a Percentage>) -> u16 {
        values.into_iter().map(|p| u16::from(p.0)).sum()
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
