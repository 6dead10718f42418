//! Pull detection: segmentation of combat events and resolution to creature IDs.

mod error;
mod pull;
mod resolver;
mod segmenter;

pub use error::PullError;
pub use pull::Pull;
pub use resolver::resolve;
pub use segmenter::segment;

pub use pullroute_types::DEFAULT_PULL_GAP_MS;

use crate::combat_log::{CombatEvent, Roster, TemplateId};

/// Run segmentation and resolution, reporting which stage came up empty.
///
/// The roster is checked first: without any templated actor nothing can be
/// tracked, which points at the actor data rather than the fight.
pub fn plan_pulls(
    events: &[CombatEvent],
    roster: &Roster,
    gap_ms: i64,
) -> Result<Vec<Pull<TemplateId>>, PullError> {
    if !roster.has_resolvable_actors() {
        return Err(PullError::NoResolvableActors);
    }

    let instance_pulls = segment(events, &roster.known_instances(), gap_ms);
    if instance_pulls.is_empty() {
        return Err(PullError::NoRelevantEvents);
    }

    let pulls = resolve(&instance_pulls, roster);
    if pulls.is_empty() {
        return Err(PullError::EmptyPullList);
    }

    tracing::info!(
        detected = instance_pulls.len(),
        resolved = pulls.len(),
        "Finished processing pulls"
    );
    Ok(pulls)
}

#[cfg(test)]
mod tests;
