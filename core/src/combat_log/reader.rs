//! Loading event and actor lists saved as JSON arrays.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::combat_event::{ActorRecord, CombatEvent};
use super::error::LoadError;

pub fn read_events(path: &Path) -> Result<Vec<CombatEvent>, LoadError> {
    let events: Vec<CombatEvent> = read_json(path)?;
    tracing::debug!(path = %path.display(), count = events.len(), "Loaded events");
    Ok(events)
}

pub fn read_actors(path: &Path) -> Result<Vec<ActorRecord>, LoadError> {
    let actors: Vec<ActorRecord> = read_json(path)?;
    tracing::debug!(path = %path.display(), count = actors.len(), "Loaded actors");
    Ok(actors)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
