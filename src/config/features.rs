//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Install the CORS layer for the configured origins
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            json_logs: false,
            enable_cors: default_enable_cors(),
        }
    }
}

fn default_enable_cors() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.json_logs);
        assert!(flags.enable_cors);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let flags: FeatureFlags = serde_json::from_str(r#"{ "json_logs": true }"#).unwrap();
        assert!(flags.json_logs);
        assert!(flags.enable_cors);

        let flags: FeatureFlags = serde_json::from_str(r#"{ "enable_cors": false }"#).unwrap();
        assert!(!flags.enable_cors);
    }
}
