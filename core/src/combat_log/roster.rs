use hashbrown::{HashMap, HashSet};

use super::combat_event::{ActorId, ActorRecord, TemplateId};

/// Immutable instance → actor lookup for one report.
///
/// Built once from the report's NPC master data before segmentation and
/// never updated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    actors: HashMap<ActorId, ActorRecord>,
}

impl Roster {
    pub fn from_actors(actors: impl IntoIterator<Item = ActorRecord>) -> Self {
        Self {
            actors: actors
                .into_iter()
                .map(|actor| (actor.instance_id, actor))
                .collect(),
        }
    }

    pub fn get(&self, instance: ActorId) -> Option<&ActorRecord> {
        self.actors.get(&instance)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Instances that carry a template ID. Actors without one are never tracked.
    pub fn known_instances(&self) -> HashSet<ActorId> {
        self.actors
            .values()
            .filter(|actor| actor.template_id.is_some())
            .map(|actor| actor.instance_id)
            .collect()
    }

    /// Template for an instance. A template of 0 is a placeholder and resolves to nothing.
    pub fn template_of(&self, instance: ActorId) -> Option<TemplateId> {
        self.get(instance)
            .and_then(|actor| actor.template_id)
            .filter(|&template| template != 0)
    }

    /// At least one entry resolves through `template_of`
    pub fn has_resolvable_actors(&self) -> bool {
        self.actors
            .keys()
            .any(|&instance| self.template_of(instance).is_some())
    }
}

impl FromIterator<ActorRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = ActorRecord>>(iter: I) -> Self {
        Self::from_actors(iter)
    }
}
