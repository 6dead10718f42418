use std::time::Duration;

use pullroute_types::WclCredentials;
use reqwest::StatusCode;
use serde_json::json;

use super::error::WclError;
use super::query::{EVENTS_QUERY, EVENTS_PAGE_LIMIT, REPORT_DETAILS_QUERY};
use super::report::{FightSelector, ReportCode};
use super::response::{self, ReportDetails};
use crate::combat_log::CombatEvent;

pub const TOKEN_URL: &str = "https://www.warcraftlogs.com/oauth/token";
pub const API_URL: &str = "https://www.warcraftlogs.com/api/v2/client";

const USER_AGENT: &str = concat!("pullroute v", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Authenticated client for the Warcraft Logs v2 GraphQL API
#[derive(Debug, Clone)]
pub struct WclClient {
    http: reqwest::Client,
    token: String,
}

impl WclClient {
    /// Exchange client credentials for a bearer token
    pub async fn authenticate(credentials: &WclCredentials) -> Result<Self, WclError> {
        tracing::info!("Requesting access token");
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| WclError::Http {
                url: TOKEN_URL,
                source,
            })?;

        let response = http
            .post(TOKEN_URL)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|source| WclError::Http {
                url: TOKEN_URL,
                source,
            })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(WclError::Unauthorized);
        }

        let body = response
            .error_for_status()
            .map_err(|source| WclError::Http {
                url: TOKEN_URL,
                source,
            })?
            .text()
            .await
            .map_err(|source| WclError::Http {
                url: TOKEN_URL,
                source,
            })?;

        let token = response::parse_access_token(TOKEN_URL, &body)?;
        tracing::info!("Access token received");
        Ok(Self { http, token })
    }

    /// Fetch zone, NPC actors and the selected fight of a report
    pub async fn report_details(
        &self,
        report: &ReportCode,
        selector: FightSelector,
    ) -> Result<ReportDetails, WclError> {
        tracing::info!(%report, "Fetching master data and fight details");
        let body = self
            .graphql(REPORT_DETAILS_QUERY, json!({ "report_id": report.as_str() }))
            .await?;
        response::parse_report_details(API_URL, &body, selector)
    }

    /// Fetch every event of one fight, following pagination to the end
    pub async fn fight_events(
        &self,
        report: &ReportCode,
        fight_id: u32,
    ) -> Result<Vec<CombatEvent>, WclError> {
        tracing::info!(%report, fight_id, "Fetching all events for fight");
        let mut events = Vec::new();
        let mut start_time = 0.0_f64;

        loop {
            let body = self
                .graphql(
                    EVENTS_QUERY,
                    json!({
                        "report_id": report.as_str(),
                        "fight_id": [fight_id],
                        "startTime": start_time,
                        "limit": EVENTS_PAGE_LIMIT,
                    }),
                )
                .await?;
            let page = response::parse_event_page(API_URL, &body)?;
            let fetched = page.data.len();
            let next = page.continuation();
            events.extend(page.data);

            match next {
                Some(ts) => {
                    tracing::debug!(fetched, next_page = ts, "Fetching next page of events");
                    start_time = ts;
                }
                None => break,
            }
        }

        tracing::info!(total = events.len(), "Retrieved all events");
        Ok(events)
    }

    async fn graphql(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<String, WclError> {
        self.http
            .post(API_URL)
            .bearer_auth(&self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| WclError::Http {
                url: API_URL,
                source,
            })?
            .text()
            .await
            .map_err(|source| WclError::Http {
                url: API_URL,
                source,
            })
    }
}
