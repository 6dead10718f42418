//! End-to-end conversion of a report into an MDT import string.

use pullroute_types::WclCredentials;
use thiserror::Error;

use crate::combat_log::{ActorRecord, CombatEvent, Roster, TemplateId};
use crate::mdt;
use crate::pulls::{Pull, PullError, plan_pulls};
use crate::wcl::{Fight, FightSelector, ReportCode, WclClient, WclError};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("client ID and client secret are required")]
    MissingCredentials,

    #[error(transparent)]
    Wcl(#[from] WclError),

    #[error("could not identify any pulls: {0}")]
    Pulls(#[from] PullError),
}

/// Result of converting pulls to an import string
#[derive(Debug, Clone)]
pub struct Conversion {
    pub pulls: Vec<Pull<TemplateId>>,
    pub dungeon_id: Option<i64>,
    pub payload: String,
}

/// A converted report fight
#[derive(Debug, Clone)]
pub struct ReportConversion {
    pub report: ReportCode,
    pub fight: Fight,
    pub conversion: Conversion,
}

/// Run pull detection over already-fetched data and encode the result
pub fn convert_events(
    events: &[CombatEvent],
    actors: Vec<ActorRecord>,
    dungeon_id: Option<i64>,
    gap_ms: i64,
) -> Result<Conversion, PullError> {
    let roster = Roster::from_actors(actors);
    tracing::debug!(
        events = events.len(),
        actors = roster.len(),
        gap_ms,
        "Processing events to identify pulls"
    );

    let pulls = plan_pulls(events, &roster, gap_ms)?;
    let payload = mdt::encode(&pulls, dungeon_id);

    Ok(Conversion {
        pulls,
        dungeon_id,
        payload,
    })
}

/// Fetch a report fight from Warcraft Logs and convert it
pub async fn convert_report(
    credentials: &WclCredentials,
    report_url: &str,
    selector: FightSelector,
    gap_ms: i64,
) -> Result<ReportConversion, ConvertError> {
    let report = ReportCode::from_url(report_url)?;
    if !credentials.is_complete() {
        return Err(ConvertError::MissingCredentials);
    }

    let client = WclClient::authenticate(credentials).await?;
    let details = client.report_details(&report, selector).await?;
    let events = client.fight_events(&report, details.fight.id).await?;

    let conversion = convert_events(&events, details.actors, details.dungeon_id, gap_ms)?;

    Ok(ReportConversion {
        report,
        fight: details.fight,
        conversion,
    })
}
