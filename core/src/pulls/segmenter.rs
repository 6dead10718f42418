//! Splits a report's combat events into pulls on gaps of inactivity.

use hashbrown::HashSet;

use super::Pull;
use crate::combat_log::{ActorId, CombatEvent};

/// Running state of the segmentation walk.
struct PullAccumulator {
    gap_ms: i64,
    pulls: Vec<Pull<ActorId>>,
    current: Pull<ActorId>,
    last_timestamp: i64,
}

impl PullAccumulator {
    fn new(gap_ms: i64) -> Self {
        Self {
            gap_ms,
            pulls: Vec::new(),
            current: Pull::new(),
            last_timestamp: 0,
        }
    }

    fn push(mut self, (timestamp, actor): (i64, ActorId)) -> Self {
        let gap = timestamp - self.last_timestamp;
        if !self.current.is_empty() && gap > self.gap_ms {
            let closed = std::mem::take(&mut self.current);
            self.pulls.push(closed);
            tracing::debug!(
                gap_secs = gap as f64 / 1000.0,
                pull = self.pulls.len(),
                mobs = self.pulls.last().map_or(0, Pull::len),
                "New pull identified after inactivity"
            );
        }
        self.current.insert(actor);
        self.last_timestamp = timestamp;
        self
    }

    fn finish(mut self) -> Vec<Pull<ActorId>> {
        if !self.current.is_empty() {
            self.pulls.push(self.current);
            tracing::debug!(
                pull = self.pulls.len(),
                mobs = self.pulls.last().map_or(0, Pull::len),
                "Final pull identified"
            );
        }
        self.pulls
    }
}

/// Partition events into pulls.
///
/// Only damage taken by a known instance and casts made by a known instance
/// count as activity. Relevant events are stably sorted by timestamp, and a
/// new pull starts whenever the time since the previously accepted event
/// exceeds `gap_ms`. A gap of exactly `gap_ms` stays in the same pull.
///
/// Returns an empty list when no event is relevant.
pub fn segment(
    events: &[CombatEvent],
    known: &HashSet<ActorId>,
    gap_ms: i64,
) -> Vec<Pull<ActorId>> {
    let mut relevant: Vec<(i64, ActorId)> = events
        .iter()
        .filter_map(|event| {
            event
                .subject()
                .filter(|actor| known.contains(actor))
                .map(|actor| (event.timestamp, actor))
        })
        .collect();

    // sort_by_key is stable: equal timestamps keep input order
    relevant.sort_by_key(|&(timestamp, _)| timestamp);

    relevant
        .into_iter()
        .fold(PullAccumulator::new(gap_ms), PullAccumulator::push)
        .finish()
}
