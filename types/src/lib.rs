//! Shared configuration types for pullroute
//!
//! This crate contains the serializable configuration persisted by
//! pullroute-core and edited from the command line.

use serde::{Deserialize, Serialize};

/// Inactivity gap, in milliseconds, that closes a pull.
pub const DEFAULT_PULL_GAP_MS: i64 = 10_000;

fn default_pull_gap_ms() -> i64 {
    DEFAULT_PULL_GAP_MS
}

fn default_fight() -> String {
    "last".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Report Service Credentials
// ─────────────────────────────────────────────────────────────────────────────

/// Warcraft Logs API v2 client credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WclCredentials {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

impl WclCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both halves of the credential pair are present
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// Secret with everything but the last four characters hidden, for display
    pub fn masked_secret(&self) -> String {
        let visible: String = {
            let chars: Vec<char> = self.client_secret.chars().collect();
            let start = chars.len().saturating_sub(4);
            chars[start..].iter().collect()
        };
        let hidden = self.client_secret.chars().count() - visible.chars().count();
        format!("{}{}", "*".repeat(hidden), visible)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Note: Persistence methods (load/save) are provided by pullroute-core via the
/// `AppConfigExt` trait, as they require platform-specific dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub credentials: WclCredentials,

    /// Gap between relevant combat events that starts a new pull.
    #[serde(default = "default_pull_gap_ms")]
    pub pull_gap_ms: i64,

    /// Directory import strings are written to. Empty means the working directory.
    #[serde(default)]
    pub output_directory: String,

    /// Fight used when none is given on the command line ("last" or a fight ID).
    #[serde(default = "default_fight")]
    pub default_fight: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_output_directory(String::new())
    }
}

impl AppConfig {
    /// Create a new AppConfig with the specified output directory.
    /// Other fields use their default values.
    pub fn with_output_directory(output_directory: String) -> Self {
        Self {
            credentials: WclCredentials::default(),
            pull_gap_ms: DEFAULT_PULL_GAP_MS,
            output_directory,
            default_fight: default_fight(),
        }
    }
}
