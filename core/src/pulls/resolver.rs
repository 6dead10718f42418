use super::Pull;
use crate::combat_log::{ActorId, Roster, TemplateId};

/// Map each pull's instances to creature templates.
///
/// Instances without a usable template are dropped, as is any pull left with
/// no members. Distinct spawns of one creature collapse to a single entry.
/// Pull order is preserved.
pub fn resolve(pulls: &[Pull<ActorId>], roster: &Roster) -> Vec<Pull<TemplateId>> {
    pulls
        .iter()
        .filter_map(|pull| {
            let resolved: Pull<TemplateId> = pull
                .iter()
                .filter_map(|&instance| roster.template_of(instance))
                .collect();
            if resolved.is_empty() {
                tracing::debug!(instances = %pull, "Dropping pull with no resolvable members");
                None
            } else {
                Some(resolved)
            }
        })
        .collect()
}
