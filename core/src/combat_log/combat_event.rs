use serde::Deserialize;

/// Per-report, per-spawn actor identifier
pub type ActorId = i64;

/// Creature template identifier, shared by every spawn of the same NPC
pub type TemplateId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Damage,
    Cast,
    #[default]
    #[serde(other)]
    Other,
}

/// A single report event. Only the fields pull detection needs are kept;
/// everything else in the payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CombatEvent {
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    /// Milliseconds since report start
    pub timestamp: i64,
    #[serde(rename = "sourceID", default)]
    pub source_id: Option<ActorId>,
    #[serde(rename = "targetID", default)]
    pub target_id: Option<ActorId>,
}

impl CombatEvent {
    pub fn damage(timestamp: i64, target_id: ActorId) -> Self {
        Self {
            event_type: EventType::Damage,
            timestamp,
            source_id: None,
            target_id: Some(target_id),
        }
    }

    pub fn cast(timestamp: i64, source_id: ActorId) -> Self {
        Self {
            event_type: EventType::Cast,
            timestamp,
            source_id: Some(source_id),
            target_id: None,
        }
    }

    /// The hostile actor this event is about: the target of damage,
    /// the caster of a cast. Other event types have no subject.
    pub fn subject(&self) -> Option<ActorId> {
        match self.event_type {
            EventType::Damage => self.target_id,
            EventType::Cast => self.source_id,
            EventType::Other => None,
        }
    }
}

/// Master-data entry for one NPC spawned in the report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActorRecord {
    #[serde(rename = "id")]
    pub instance_id: ActorId,
    /// Diagnostic only
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(rename = "gameID", default)]
    pub template_id: Option<TemplateId>,
}

impl ActorRecord {
    pub fn new(instance_id: ActorId, display_name: &str, template_id: Option<TemplateId>) -> Self {
        Self {
            instance_id,
            display_name: display_name.to_string(),
            template_id,
        }
    }
}
