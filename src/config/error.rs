//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Default input '{field}' must be between 0 and 100, got {actual}")]
    InputOutOfRange { field: &'static str, actual: i64 },

    #[error("Unknown default input '{0}'")]
    UnknownInput(String),

    #[error("Chart size {width}x{height} is below the minimum {min_width}x{min_height}")]
    ChartTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("Chart size exceeds maximum allowed ({0}px per side)")]
    ChartTooLarge(u32),
}
