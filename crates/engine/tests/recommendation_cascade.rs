//! End-to-end arbiter behavior: the fixed-priority cascade over real
//! analyzer state, driven by a manual clock and in-memory oracles.

use combat_core::{
    AlwaysCastable, CombatEnv, Direction, EntityId, HostileSnapshot, ManualClock, OpenField,
    Percent, PlayerSnapshot, Position, TargetSnapshot, TickSnapshot, Vocation,
};
use combat_engine::{CombatEngine, RecommendedAction, ThreatTier};

fn player() -> PlayerSnapshot {
    PlayerSnapshot {
        position: Position::ORIGIN,
        facing: Direction::North,
        mana: Percent::FULL,
        vocation: Vocation::Sorcerer,
    }
}

fn hostile(id: u32, name: &str, hp: u8, x: i32, y: i32) -> HostileSnapshot {
    HostileSnapshot::new(EntityId(id), Position::new(x, y, 0), name, Percent::new(hp))
}

#[test]
fn critical_threat_beats_a_qualifying_wave() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    // Four adjacent demons: every wave direction north hits all four, but
    // the aggregate threat is far past critical.
    let snapshot = TickSnapshot::new(player()).with_hostiles([
        hostile(1, "demon", 100, -1, -1),
        hostile(2, "demon", 100, 0, -1),
        hostile(3, "demon", 100, 1, -1),
        hostile(4, "demon", 100, 0, -2),
    ]);

    let action = engine.recommend(&snapshot, &env);
    assert_eq!(action.kind(), "defensive");
    match action {
        RecommendedAction::Defensive { threat, .. } => {
            assert_eq!(threat.tier, ThreatTier::Critical);
            assert_eq!(threat.group_count, 4);
        }
        other => panic!("expected defensive, got {other:?}"),
    }
}

#[test]
fn settled_pack_draws_a_wave_spell() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    // Four weak hostiles inside the northern wedge; first sighting counts
    // as stationary, so the stack is optimal and nothing says wait.
    let snapshot = TickSnapshot::new(player()).with_hostiles([
        hostile(1, "rat", 100, 0, -1),
        hostile(2, "rat", 100, 1, -2),
        hostile(3, "rat", 100, -1, -2),
        hostile(4, "rat", 100, 0, -2),
    ]);

    let action = engine.recommend(&snapshot, &env);
    match action {
        RecommendedAction::WaveSpell { cast, .. } => {
            assert_eq!(cast.direction, Direction::North);
            assert_eq!(cast.monster_count, 4);
            assert!(!cast.needs_reposition);
        }
        other => panic!("expected wave_spell, got {other:?}"),
    }
}

#[test]
fn moving_pack_defers_the_wave() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    let settled = TickSnapshot::new(player()).with_hostiles([
        hostile(1, "rat", 100, 0, -1),
        hostile(2, "rat", 100, 1, -2),
        hostile(3, "rat", 100, -1, -2),
        hostile(4, "rat", 100, 0, -2),
    ]);
    let first = engine.recommend(&settled, &env);
    assert_eq!(first.kind(), "wave_spell");

    // Everyone shuffles one tile but stays inside the wedge: the wave
    // still qualifies on count, yet the stack analyzer votes to wait and
    // the cascade falls through to a plain attack.
    clock.advance(300);
    let scrambling = TickSnapshot::new(player()).with_hostiles([
        hostile(1, "rat", 100, 1, -1),
        hostile(2, "rat", 100, 2, -2),
        hostile(3, "rat", 100, 0, -2),
        hostile(4, "rat", 100, 0, -3),
    ]);
    let second = engine.recommend(&scrambling, &env);
    assert_eq!(second.kind(), "attack");
}

#[test]
fn finisher_takes_the_lowest_health_qualifier() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    let snapshot = TickSnapshot::new(player()).with_hostiles([
        hostile(1, "dragon", 100, 2, 0),
        hostile(2, "wolf", 12, 1, 0),
        hostile(3, "rat", 8, 3, 0),
    ]);

    let action = engine.recommend(&snapshot, &env);
    match action {
        RecommendedAction::Finisher { target, .. } => {
            // Both the wolf and the rat are under the threshold; the rat
            // has less health left.
            assert_eq!(target.id, EntityId(3));
            assert_eq!(target.health, Percent::new(8));
        }
        other => panic!("expected finisher, got {other:?}"),
    }
}

#[test]
fn attack_falls_back_to_the_top_priority_entry() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    let snapshot = TickSnapshot::new(player()).with_hostiles([
        hostile(1, "rat", 100, 2, 0),
        hostile(2, "dragon", 100, 2, 1),
    ]);

    let action = engine.recommend(&snapshot, &env);
    match action {
        RecommendedAction::Attack { target, .. } => {
            // The dragon outranks the rat on danger and loot.
            assert_eq!(target.id, EntityId(2));
        }
        other => panic!("expected attack, got {other:?}"),
    }
}

#[test]
fn empty_field_recommends_nothing() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    let action = engine.recommend(&TickSnapshot::new(player()), &env);
    assert_eq!(action, RecommendedAction::None {
        reason: "no qualifying hostiles".into(),
    });
}

#[test]
fn introspection_reads_the_last_computation() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    assert!(engine.last_threat().is_none());
    assert!(engine.last_priorities().is_empty());
    assert!(engine.last_stack().is_none());

    let snapshot = TickSnapshot::new(player()).with_hostiles([
        hostile(1, "dragon", 100, 2, 0),
        hostile(2, "rat", 100, 1, 0),
    ]);
    engine.recommend(&snapshot, &env);

    let threat = engine.last_threat().expect("threat was computed");
    assert_eq!(threat.entries.len(), 2);
    assert_eq!(engine.last_priorities().len(), 2);
    // No committable wave existed, so the stack analyzer never ran.
    assert!(engine.last_stack().is_none());
}

#[test]
fn combo_surface_walks_a_sequence() {
    let mut engine = CombatEngine::with_defaults();
    let clock = ManualClock::new(0);
    let env = CombatEnv::new(&OpenField, &clock, &AlwaysCastable);

    let snapshot = TickSnapshot::new(player()).with_target(TargetSnapshot {
        id: EntityId(7),
        name: "dragon".into(),
        health: Percent::new(10),
    });

    let selection = engine
        .optimal_sequence(&snapshot, &env)
        .expect("mana is full and no combo completed yet");
    assert_eq!(selection.spells, &["arcane execution"]);
    assert_eq!(engine.next_spell(&selection, &env), Some("arcane execution"));
}
