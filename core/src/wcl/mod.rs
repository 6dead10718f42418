//! Warcraft Logs report client.
//!
//! Authenticates with client credentials, reads a report's fights and NPC
//! master data, and pages through a fight's events.

mod client;
mod error;
mod query;
mod report;
mod response;

pub use client::{API_URL, TOKEN_URL, WclClient};
pub use error::WclError;
pub use report::{FightSelector, ReportCode};
pub use response::{
    EventPage, Fight, ReportDetails, parse_access_token, parse_event_page, parse_report_details,
    select_fight,
};

#[cfg(test)]
mod tests;
