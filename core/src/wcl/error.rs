//! Error types for the Warcraft Logs client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WclError {
    #[error(
        "invalid report URL '{url}': \
         expected https://www.warcraftlogs.com/reports/<16 character code>"
    )]
    InvalidReportUrl { url: String },

    #[error("invalid fight ID '{value}': must be 'last' or a number")]
    InvalidFightId { value: String },

    #[error("authentication failed (401 Unauthorized): check the client ID and client secret")]
    Unauthorized,

    #[error("token response did not contain an access token")]
    MissingAccessToken,

    #[error("request to {url} failed")]
    Http {
        url: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {url}")]
    Decode {
        url: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("GraphQL API error: {message}")]
    GraphQl { message: String },

    #[error("could not find report data")]
    ReportNotFound,

    #[error("no fights found in this report")]
    NoFights,

    #[error("fight ID '{id}' not found in the report")]
    FightNotFound { id: u32 },
}
