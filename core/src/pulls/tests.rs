use hashbrown::HashSet;

use super::*;
use crate::combat_log::{ActorRecord, CombatEvent, Roster};

fn known(ids: &[i64]) -> HashSet<i64> {
    ids.iter().copied().collect()
}

fn pull(ids: &[i64]) -> Pull<i64> {
    ids.iter().copied().collect()
}

fn roster() -> Roster {
    Roster::from_actors([
        ActorRecord::new(1, "Mob A", Some(100)),
        ActorRecord::new(2, "Mob B", Some(200)),
        ActorRecord::new(3, "Mob A", Some(100)),
        ActorRecord::new(4, "Placeholder", Some(0)),
        ActorRecord::new(5, "Totem", None),
    ])
}

// segment

#[test]
fn test_segment_splits_on_gap() {
    let events = vec![
        CombatEvent::damage(0, 1),
        CombatEvent::damage(5_000, 1),
        CombatEvent::damage(20_000, 2),
    ];

    let pulls = segment(&events, &known(&[1, 2]), 10_000);

    assert_eq!(pulls, vec![pull(&[1]), pull(&[2])]);
}

#[test]
fn test_segment_empty_input() {
    assert!(segment(&[], &known(&[1]), 10_000).is_empty());
}

#[test]
fn test_segment_single_event() {
    let pulls = segment(&[CombatEvent::cast(700, 2)], &known(&[2]), 10_000);
    assert_eq!(pulls, vec![pull(&[2])]);
}

#[test]
fn test_segment_gap_equal_to_threshold_stays_in_pull() {
    let events = vec![CombatEvent::damage(0, 1), CombatEvent::damage(10_000, 2)];
    let pulls = segment(&events, &known(&[1, 2]), 10_000);
    assert_eq!(pulls, vec![pull(&[1, 2])]);
}

#[test]
fn test_segment_gap_one_over_threshold_splits() {
    let events = vec![CombatEvent::damage(0, 1), CombatEvent::damage(10_001, 2)];
    let pulls = segment(&events, &known(&[1, 2]), 10_000);
    assert_eq!(pulls, vec![pull(&[1]), pull(&[2])]);
}

#[test]
fn test_segment_gap_measured_from_last_accepted_event() {
    // Each step is under the threshold even though the pull spans 24s
    let events = vec![
        CombatEvent::damage(0, 1),
        CombatEvent::damage(8_000, 1),
        CombatEvent::damage(16_000, 2),
        CombatEvent::damage(24_000, 1),
    ];
    let pulls = segment(&events, &known(&[1, 2]), 10_000);
    assert_eq!(pulls, vec![pull(&[1, 2])]);
}

#[test]
fn test_segment_ignores_unknown_and_irrelevant_events() {
    let mut heal = CombatEvent::cast(1_000, 1);
    heal.event_type = crate::combat_log::EventType::Other;

    let events = vec![
        // damage dealt BY a known NPC to a player does not count
        CombatEvent {
            target_id: Some(99),
            source_id: Some(1),
            ..CombatEvent::damage(0, 99)
        },
        // cast targeting a known NPC by a player does not count
        CombatEvent {
            target_id: Some(1),
            ..CombatEvent::cast(500, 99)
        },
        heal,
        CombatEvent::damage(30_000, 2),
    ];

    let pulls = segment(&events, &known(&[1, 2]), 10_000);
    assert_eq!(pulls, vec![pull(&[2])]);
}

#[test]
fn test_segment_cast_starts_pull() {
    // A patrol casting before any damage opens the pull at the cast time
    let events = vec![
        CombatEvent::damage(0, 1),
        CombatEvent::cast(15_000, 2),
        CombatEvent::damage(24_000, 2),
    ];
    let pulls = segment(&events, &known(&[1, 2]), 10_000);
    assert_eq!(pulls, vec![pull(&[1]), pull(&[2])]);
}

#[test]
fn test_segment_sorts_unordered_input() {
    let ordered = vec![
        CombatEvent::damage(0, 1),
        CombatEvent::damage(3_000, 2),
        CombatEvent::damage(40_000, 3),
        CombatEvent::cast(42_000, 1),
        CombatEvent::damage(90_000, 2),
    ];
    let mut shuffled = ordered.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    let known = known(&[1, 2, 3]);
    assert_eq!(
        segment(&ordered, &known, 10_000),
        segment(&shuffled, &known, 10_000)
    );
    assert_eq!(
        segment(&shuffled, &known, 10_000),
        vec![pull(&[1, 2]), pull(&[3, 1]), pull(&[2])]
    );
}

#[test]
fn test_segment_ties_keep_input_order() {
    let events = vec![CombatEvent::damage(100, 2), CombatEvent::damage(100, 1)];
    let pulls = segment(&events, &known(&[1, 2]), 10_000);
    assert_eq!(pulls[0].members(), &[2, 1]);
}

#[test]
fn test_segment_deduplicates_members() {
    let events = vec![
        CombatEvent::damage(0, 1),
        CombatEvent::damage(100, 1),
        CombatEvent::cast(200, 1),
    ];
    let pulls = segment(&events, &known(&[1]), 10_000);
    assert_eq!(pulls.len(), 1);
    assert_eq!(pulls[0].len(), 1);
}

#[test]
fn test_segment_same_actor_across_gap_is_two_pulls() {
    let events = vec![CombatEvent::damage(0, 1), CombatEvent::damage(60_000, 1)];
    let pulls = segment(&events, &known(&[1]), 10_000);
    assert_eq!(pulls, vec![pull(&[1]), pull(&[1])]);
}

#[test]
fn test_segment_pulls_satisfy_gap_invariants() {
    let timestamps = [0, 900, 12_000, 12_500, 22_500, 40_000, 40_001, 75_000];
    let events: Vec<_> = timestamps
        .iter()
        .enumerate()
        .map(|(i, &ts)| CombatEvent::damage(ts, (i % 3) as i64 + 1))
        .collect();
    let gap = 10_000;

    let pulls = segment(&events, &known(&[1, 2, 3]), gap);

    assert!(pulls.iter().all(|p| !p.is_empty()));
    // 0,900 | 12000,12500,22500 | 40000,40001 | 75000
    assert_eq!(pulls.len(), 4);
}

// resolve

#[test]
fn test_resolve_maps_and_collapses_templates() {
    let pulls = vec![pull(&[1, 3, 2]), pull(&[2])];
    let resolved = resolve(&pulls, &roster());
    assert_eq!(resolved, vec![pull(&[100, 200]), pull(&[200])]);
}

#[test]
fn test_resolve_drops_unresolvable_pulls() {
    let pulls = vec![pull(&[4, 5]), pull(&[1]), pull(&[42])];
    let resolved = resolve(&pulls, &roster());
    assert_eq!(resolved, vec![pull(&[100])]);
}

#[test]
fn test_resolve_never_emits_unknown_templates() {
    let roster = roster();
    let pulls = vec![pull(&[1, 2, 3, 4, 5, 6])];
    let resolved = resolve(&pulls, &roster);

    assert!(resolved.len() <= pulls.len());
    for template in resolved.iter().flatten() {
        assert!([100, 200].contains(template));
    }
}

// plan_pulls

#[test]
fn test_plan_pulls_round_trip_scenario() {
    let roster = Roster::from_actors([
        ActorRecord::new(1, "A", Some(100)),
        ActorRecord::new(2, "B", Some(200)),
    ]);
    let events = vec![
        CombatEvent::damage(0, 1),
        CombatEvent::damage(5_000, 1),
        CombatEvent::damage(20_000, 2),
    ];

    let pulls = plan_pulls(&events, &roster, DEFAULT_PULL_GAP_MS).unwrap();

    assert_eq!(pulls, vec![pull(&[100]), pull(&[200])]);
}

#[test]
fn test_plan_pulls_no_events() {
    let err = plan_pulls(&[], &roster(), DEFAULT_PULL_GAP_MS).unwrap_err();
    assert_eq!(err, PullError::NoRelevantEvents);
}

#[test]
fn test_plan_pulls_unresolvable_roster() {
    let roster = Roster::from_actors([
        ActorRecord::new(1, "A", None),
        ActorRecord::new(2, "B", None),
    ]);
    let events = vec![CombatEvent::damage(0, 1), CombatEvent::damage(100, 2)];

    let err = plan_pulls(&events, &roster, DEFAULT_PULL_GAP_MS).unwrap_err();
    assert_eq!(err, PullError::NoResolvableActors);
}

#[test]
fn test_plan_pulls_placeholder_only_roster() {
    let roster = Roster::from_actors([
        ActorRecord::new(1, "A", Some(0)),
        ActorRecord::new(2, "B", Some(0)),
    ]);
    let events = vec![CombatEvent::damage(0, 1), CombatEvent::damage(100, 2)];

    let err = plan_pulls(&events, &roster, DEFAULT_PULL_GAP_MS).unwrap_err();
    assert_eq!(err, PullError::NoResolvableActors);
}

#[test]
fn test_plan_pulls_all_pulls_dropped() {
    // Instance 4 is tracked but its template is a placeholder
    let events = vec![CombatEvent::damage(0, 4)];
    let err = plan_pulls(&events, &roster(), DEFAULT_PULL_GAP_MS).unwrap_err();
    assert_eq!(err, PullError::EmptyPullList);
}

#[test]
fn test_pull_display() {
    assert_eq!(pull(&[100, 200]).to_string(), "{100, 200}");
    assert_eq!(Pull::<i64>::new().to_string(), "{}");
}
