pub mod combat_log;
pub mod context;
pub mod mdt;
pub mod pipeline;
pub mod pulls;
pub mod storage;
pub mod wcl;

// Re-exports for convenience
pub use combat_log::*;
pub use context::{AppConfig, AppConfigExt, ConfigError, WclCredentials};
pub use mdt::{MdtPreset, encode};
pub use pipeline::{ConvertError, Conversion, ReportConversion, convert_events, convert_report};
pub use pulls::{DEFAULT_PULL_GAP_MS, Pull, PullError, plan_pulls, resolve, segment};
pub use storage::{ExportError, write_export};
pub use wcl::{FightSelector, ReportCode, WclClient, WclError};
