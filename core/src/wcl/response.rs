//! Response payloads of the Warcraft Logs v2 API and their decoding.
//!
//! Kept free of any transport so decoding can be tested against captured
//! JSON bodies.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::WclError;
use super::report::FightSelector;
use crate::combat_log::{ActorRecord, CombatEvent};

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportData<T> {
    report_data: Option<ReportField<T>>,
}

#[derive(Debug, Deserialize)]
struct ReportField<T> {
    report: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportDetailsPayload {
    zone: Option<Zone>,
    master_data: Option<MasterData>,
    #[serde(default)]
    fights: Option<Vec<Fight>>,
}

#[derive(Debug, Deserialize)]
struct Zone {
    id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MasterData {
    #[serde(default)]
    actors: Option<Vec<ActorRecord>>,
}

#[derive(Debug, Deserialize)]
struct EventsPayload {
    events: Option<EventPage>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// One fight in a report
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub keystone_level: Option<u32>,
}

/// The selected fight plus everything pull detection needs from master data
#[derive(Debug, Clone)]
pub struct ReportDetails {
    pub fight: Fight,
    /// Zone ID of the report; MDT uses it as the dungeon index
    pub dungeon_id: Option<i64>,
    pub actors: Vec<ActorRecord>,
}

/// One page of events
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    #[serde(default)]
    pub data: Vec<CombatEvent>,
    #[serde(default)]
    pub next_page_timestamp: Option<f64>,
}

impl EventPage {
    /// Where the next request should start, if the server has more events.
    /// A zero timestamp is treated as the end of the stream.
    pub fn continuation(&self) -> Option<f64> {
        self.next_page_timestamp.filter(|&ts| ts > 0.0)
    }
}

fn decode<T: DeserializeOwned>(url: &'static str, body: &str) -> Result<T, WclError> {
    serde_json::from_str(body).map_err(|source| WclError::Decode { url, source })
}

fn into_report<T: DeserializeOwned>(url: &'static str, body: &str) -> Result<T, WclError> {
    let response: GraphQlResponse<ReportData<T>> = decode(url, body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let message = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(WclError::GraphQl { message });
    }

    response
        .data
        .and_then(|d| d.report_data)
        .and_then(|r| r.report)
        .ok_or(WclError::ReportNotFound)
}

pub fn parse_access_token(url: &'static str, body: &str) -> Result<String, WclError> {
    let token: TokenResponse = decode(url, body)?;
    token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(WclError::MissingAccessToken)
}

/// Pick the fight to convert.
///
/// `Last` prefers the last fight with a keystone level so trailing boss
/// kills or wipes logged after a key don't shadow the key itself.
pub fn select_fight(fights: &[Fight], selector: FightSelector) -> Result<Fight, WclError> {
    if fights.is_empty() {
        return Err(WclError::NoFights);
    }

    let fight = match selector {
        FightSelector::Last => fights
            .iter()
            .rev()
            .find(|f| f.keystone_level.is_some())
            .or_else(|| fights.last()),
        FightSelector::Id(id) => fights.iter().find(|f| f.id == id),
    };

    match (fight, selector) {
        (Some(fight), _) => Ok(fight.clone()),
        (None, FightSelector::Id(id)) => Err(WclError::FightNotFound { id }),
        (None, FightSelector::Last) => Err(WclError::NoFights),
    }
}

pub fn parse_report_details(
    url: &'static str,
    body: &str,
    selector: FightSelector,
) -> Result<ReportDetails, WclError> {
    let report: ReportDetailsPayload = into_report(url, body)?;

    let fight = select_fight(report.fights.as_deref().unwrap_or_default(), selector)?;
    tracing::info!(fight = %fight.name, id = fight.id, "Found fight");

    let dungeon_id = report.zone.and_then(|z| z.id).filter(|&id| id != 0);
    if dungeon_id.is_none() {
        tracing::warn!("Could not determine dungeon ID from the report's zone information");
    }

    let actors = report
        .master_data
        .and_then(|m| m.actors)
        .unwrap_or_default();
    if actors.is_empty() {
        tracing::warn!("Could not fetch NPC master data from the report");
    }

    Ok(ReportDetails {
        fight,
        dungeon_id,
        actors,
    })
}

pub fn parse_event_page(url: &'static str, body: &str) -> Result<EventPage, WclError> {
    let payload: EventsPayload = into_report(url, body)?;
    Ok(payload.events.unwrap_or_default())
}
