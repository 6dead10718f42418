use std::path::PathBuf;

use pullroute_core::context::{AppConfig, AppConfigExt, WclCredentials, validate_pull_gap};
use pullroute_core::storage::output_dir;
use pullroute_core::wcl::FightSelector;

/// Holds the stored configuration for one CLI invocation.
/// Command-line flags override stored values without persisting them.
pub struct CliContext {
    pub config: AppConfig,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: AppConfig::load(),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn credentials(
        &self,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> WclCredentials {
        let stored = &self.config.credentials;
        WclCredentials::new(
            client_id.unwrap_or(stored.client_id.as_str()),
            client_secret.unwrap_or(stored.client_secret.as_str()),
        )
    }

    /// Gap from the flag or the stored config, rejected unless positive
    pub fn pull_gap_ms(&self, override_ms: Option<i64>) -> Result<i64, String> {
        let ms = override_ms.unwrap_or(self.config.pull_gap_ms);
        validate_pull_gap(ms).map_err(|e| e.to_string())
    }

    pub fn output_dir(&self, override_dir: Option<&PathBuf>) -> PathBuf {
        override_dir
            .cloned()
            .unwrap_or_else(|| output_dir(&self.config.output_directory))
    }

    pub fn fight(&self, override_fight: Option<&str>) -> Result<FightSelector, String> {
        override_fight
            .unwrap_or(self.config.default_fight.as_str())
            .parse()
            .map_err(|e: pullroute_core::WclError| e.to_string())
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
