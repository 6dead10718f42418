//! Application configuration
//!
//! This module re-exports shared types from pullroute-types and provides
//! persistence for AppConfig.

use std::path::PathBuf;

pub use pullroute_types::{AppConfig, DEFAULT_PULL_GAP_MS, WclCredentials};

use super::error::ConfigError;

const APP_NAME: &str = "pullroute";
const CONFIG_NAME: &str = "config";

/// Check a pull gap before it reaches segmentation.
///
/// A threshold of zero or less would split events sharing a timestamp into
/// separate pulls.
pub fn validate_pull_gap(ms: i64) -> Result<i64, ConfigError> {
    if ms <= 0 {
        return Err(ConfigError::InvalidPullGap { ms });
    }
    Ok(ms)
}

/// Replace an invalid stored gap (e.g. from a hand-edited file) with the default
fn with_valid_pull_gap(mut config: AppConfig) -> AppConfig {
    if let Err(e) = validate_pull_gap(config.pull_gap_ms) {
        tracing::warn!(error = %e, default_ms = DEFAULT_PULL_GAP_MS, "Ignoring stored pull gap");
        config.pull_gap_ms = DEFAULT_PULL_GAP_MS;
    }
    config
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence and validation
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn path() -> Result<PathBuf, ConfigError>;
    fn set_credentials(&mut self, credentials: WclCredentials);
    fn set_pull_gap(&mut self, ms: i64) -> Result<(), ConfigError>;
}

impl AppConfigExt for AppConfig {
    /// Load the stored config, falling back to defaults if it is missing or unreadable
    fn load() -> Self {
        let config = Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        });
        with_valid_pull_gap(config)
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)?;
        tracing::debug!("Configuration saved");
        Ok(())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Path)
    }

    fn set_credentials(&mut self, credentials: WclCredentials) {
        self.credentials = credentials;
    }

    fn set_pull_gap(&mut self, ms: i64) -> Result<(), ConfigError> {
        self.pull_gap_ms = validate_pull_gap(ms)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pull_gap_rejects_non_positive() {
        let mut config = AppConfig::default();
        assert!(matches!(
            config.set_pull_gap(0),
            Err(ConfigError::InvalidPullGap { ms: 0 })
        ));
        assert_eq!(config.pull_gap_ms, DEFAULT_PULL_GAP_MS);

        config.set_pull_gap(7_500).unwrap();
        assert_eq!(config.pull_gap_ms, 7_500);
    }

    #[test]
    fn validate_pull_gap_accepts_positive_only() {
        assert_eq!(validate_pull_gap(1).unwrap(), 1);
        assert_eq!(validate_pull_gap(10_000).unwrap(), 10_000);
        assert!(matches!(
            validate_pull_gap(-1),
            Err(ConfigError::InvalidPullGap { ms: -1 })
        ));
    }

    #[test]
    fn stored_negative_gap_falls_back_to_default() {
        let config: AppConfig = serde_json::from_str(r#"{ "pull_gap_ms": -250 }"#).unwrap();
        assert_eq!(with_valid_pull_gap(config).pull_gap_ms, DEFAULT_PULL_GAP_MS);

        let config: AppConfig = serde_json::from_str(r#"{ "pull_gap_ms": 4000 }"#).unwrap();
        assert_eq!(with_valid_pull_gap(config).pull_gap_ms, 4_000);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "credentials": { "client_id": "abc" } }"#).unwrap();
        assert_eq!(config.credentials.client_id, "abc");
        assert_eq!(config.pull_gap_ms, DEFAULT_PULL_GAP_MS);
        assert_eq!(config.default_fight, "last");
    }
}
