mod config;
mod error;

pub use config::{
    AppConfig, AppConfigExt, DEFAULT_PULL_GAP_MS, WclCredentials, validate_pull_gap,
};
pub use error::ConfigError;
