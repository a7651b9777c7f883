//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TREATMENT_CHOICE` prefix and nested values are separated by double underscores.
//! Every value has a default, so an empty environment yields a runnable server.
//!
//! # Example
//!
//! ```no_run
//! use treatment_choice::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod chart;
mod error;
mod features;
mod inputs;
mod server;

pub use chart::{ChartConfig, MAX_CHART_SIDE};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use inputs::InputsConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Starting values for the decision inputs
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Comparison chart canvas
    #[serde(default)]
    pub chart: ChartConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TREATMENT_CHOICE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TREATMENT_CHOICE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TREATMENT_CHOICE__INPUTS__SURGERY_CURE=65` -> `inputs["surgery_cure"] = 65`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TREATMENT_CHOICE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.inputs.validate()?;
        self.chart.validate()?;
        Ok(())
    }

    /// CORS origins to allow, empty when CORS is disabled
    pub fn cors_origins(&self) -> Vec<String> {
        if self.features.enable_cors {
            self.server.cors_origins_list()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy::InputField;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TREATMENT_CHOICE__SERVER__PORT",
        "TREATMENT_CHOICE__SERVER__CORS_ORIGINS",
        "TREATMENT_CHOICE__INPUTS__SURGERY_CURE",
        "TREATMENT_CHOICE__INPUTS__QOL_WAIT_NO_RECUR",
        "TREATMENT_CHOICE__INPUTS__QOL_WAIT_RECUR_TREATABLE",
        "TREATMENT_CHOICE__CHART__WIDTH",
        "TREATMENT_CHOICE__FEATURES__JSON_LOGS",
        "TREATMENT_CHOICE__FEATURES__ENABLE_CORS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.inputs, InputsConfig::default());
        assert_eq!(config.chart, ChartConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TREATMENT_CHOICE__SERVER__PORT", "3000");
        env::set_var("TREATMENT_CHOICE__INPUTS__SURGERY_CURE", "65");
        env::set_var("TREATMENT_CHOICE__INPUTS__QOL_WAIT_NO_RECUR", "80");
        env::set_var("TREATMENT_CHOICE__CHART__WIDTH", "640");
        env::set_var("TREATMENT_CHOICE__FEATURES__JSON_LOGS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.inputs.value(InputField::SurgeryCure), 65);
        assert_eq!(config.inputs.value(InputField::QolWaitNoRecur), 80);
        assert_eq!(config.inputs.value(InputField::WaitNoRecur), 50);
        assert!(config.validate().is_ok());
        assert_eq!(config.chart.width, 640);
        assert_eq!(config.chart.height, 320);
        assert!(config.features.json_logs);
    }

    #[test]
    fn test_out_of_range_input_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TREATMENT_CHOICE__INPUTS__SURGERY_CURE", "150");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InputOutOfRange {
                field: "surgery_cure",
                actual: 150,
            })
        );
    }

    #[test]
    fn test_input_beyond_byte_range_names_the_field() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TREATMENT_CHOICE__INPUTS__QOL_WAIT_RECUR_TREATABLE", "300");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InputOutOfRange {
                field: "qol_wait_recur_treatable",
                actual: 300,
            }
        );
        assert!(err.to_string().contains("qol_wait_recur_treatable"));
    }

    #[test]
    fn test_negative_input_names_the_field() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TREATMENT_CHOICE__INPUTS__QOL_WAIT_RECUR_TREATABLE", "-1");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InputOutOfRange {
                field: "qol_wait_recur_treatable",
                actual: -1,
            })
        );
    }

    #[test]
    fn test_cors_origins_respect_feature_flag() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TREATMENT_CHOICE__SERVER__CORS_ORIGINS", "http://localhost:5173");
        env::set_var("TREATMENT_CHOICE__FEATURES__ENABLE_CORS", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.cors_origins_list(), vec!["http://localhost:5173"]);
        assert!(config.cors_origins().is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.features.enable_cors);
        assert!(config.cors_origins().is_empty());
    }
}
