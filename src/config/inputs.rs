//! Default decision inputs
//!
//! Each slider can be preset through the environment, e.g.
//! `TREATMENT_CHOICE__INPUTS__SURGERY_CURE=65`. Unset values fall back to the
//! built-in defaults of [`InputField::default_value`].

use serde::Deserialize;
use std::collections::HashMap;

use super::error::ValidationError;
use crate::domain::foundation::Percentage;
use crate::domain::strategy::{DecisionInputs, InputField};

/// Starting values for the twelve decision inputs, keyed by input name
///
/// Values are kept as wide integers until validation so that negative or
/// oversized settings are reported against the input they belong to.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct InputsConfig {
    overrides: HashMap<String, i64>,
}

impl InputsConfig {
    /// Preset a single input
    pub fn with(mut self, field: InputField, value: i64) -> Self {
        self.overrides.insert(field.name().to_string(), value);
        self
    }

    /// Raw configured value for one input
    pub fn value(&self, field: InputField) -> i64 {
        self.overrides
            .get(field.name())
            .copied()
            .unwrap_or_else(|| i64::from(field.default_value().value()))
    }

    /// Converts the configured values into domain inputs.
    ///
    /// # Errors
    ///
    /// Returns `UnknownInput` for a key that names no input, and
    /// `InputOutOfRange` for the first value outside 0..=100.
    pub fn to_decision_inputs(&self) -> Result<DecisionInputs, ValidationError> {
        if let Some(name) = self
            .overrides
            .keys()
            .find(|name| InputField::from_name(name).is_none())
        {
            return Err(ValidationError::UnknownInput(name.clone()));
        }

        let mut inputs = DecisionInputs::default();
        for &field in InputField::all() {
            let actual = self.value(field);
            let value = Percentage::try_for_field(field.name(), actual).map_err(|_| {
                ValidationError::InputOutOfRange {
                    field: field.name(),
                    actual,
                }
            })?;
            inputs.set(field, value);
        }
        Ok(inputs)
    }

    /// Validate that every configured value is a percentage
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_decision_inputs().map(|_| ())
    }
}
