//! Error types for pull detection

use thiserror::Error;

/// Conditions under which no pull list can be produced.
///
/// None of these indicate corrupted state; each names the stage that came up empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PullError {
    #[error("no relevant combat events found for enemy NPCs")]
    NoRelevantEvents,

    #[error("no NPC actor in the report has a creature ID")]
    NoResolvableActors,

    #[error("every detected pull was dropped: no member resolved to a creature ID")]
    EmptyPullList,
}
