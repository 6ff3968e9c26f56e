use gunrpg_core::enums::{AimState, CombatPhase, CoverLevel};
use gunrpg_core::ids::OperatorId;
use gunrpg_core::weapon::{DamageBand, Weapon};

use crate::combat::Combat;
use crate::config::CombatConfig;
use crate::intents::{MovementIntent, PrimaryIntent, SimultaneousIntents, StanceIntent};
use crate::operator::CombatOperator;

fn weapon(bullet_velocity_mps: f32) -> Weapon {
    Weapon {
        name: "test-rifle".to_string(),
        rounds_per_minute: 600.0,
        magazine_size: 30,
        reload_ms: 2000,
        damage_bands: vec![DamageBand::new(0.0, f32::INFINITY, 40.0)],
        headshot_multiplier: 3.0,
        bullet_velocity_mps,
        hipfire_spread: 3.0,
        ads_spread: 1.0,
        vertical_recoil: 0.0,
        recoil_recovery_ms: 300,
        ads_transition_ms: 250,
        sprint_to_fire_ms: 300,
        suppression_factor: 0.1,
        flinch_resistance: 0.0,
    }
}

fn fire_intent() -> SimultaneousIntents {
    SimultaneousIntents {
        stance: StanceIntent::None,
        movement: MovementIntent::Stand,
        primary: PrimaryIntent::Fire,
        submitted_at_ms: 0,
    }
}

/// Scenario A — deterministic hit. Player is ADS with perfect accuracy and
/// proficiency; enemy has zero accuracy. Both fire at t=0 from 10 m with a
/// 730 m/s weapon, so both shots resolve at ceil(10/730 * 1000) = 14 ms.
#[test]
fn scenario_a_deterministic_hit() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();

    let mut player = CombatOperator::new(player_id, "player", weapon(730.0), 10.0);
    player.aim_state = AimState::ADS;
    player.accuracy = 1.0;
    player.accuracy_proficiency = 1.0;

    let mut enemy = CombatOperator::new(enemy_id, "enemy", weapon(730.0), 10.0);
    enemy.accuracy = 0.0;
    enemy.accuracy_proficiency = 0.0;

    let mut combat = Combat::new(player, enemy, CombatConfig { seed: 42, ..CombatConfig::default() });

    combat.submit_intents(player_id, fire_intent()).unwrap();
    combat.submit_intents(enemy_id, fire_intent()).unwrap();
    combat.begin_execution().unwrap();

    let outcome = combat.execute_until_round_end().unwrap();

    let damage_events: Vec<_> = outcome
        .events_emitted
        .iter()
        .filter(|e| matches!(e, crate::event::SimulationEvent::DamageApplied { .. }))
        .collect();
    assert_eq!(damage_events.len(), 1, "exactly one hit should land and end the round");
    assert!(outcome.player_view.health < outcome.player_view.max_health);
    assert_eq!(outcome.phase, CombatPhase::Planning);
}

/// Scenario B — an in-flight bullet survives `begin_execution`'s clear and
/// still resolves even after a new planning phase intervenes.
///
/// Player's shot travels 10 m at 20 m/s (500 ms); enemy's travels the same
/// 10 m at a near-instant 100 000 m/s, so enemy's guaranteed headshot ends
/// round one before player's slower bullet is ever dequeued. Round two then
/// submits fresh non-firing intents and confirms player's round-one bullet
/// still lands on enemy.
#[test]
fn scenario_b_in_flight_bullet_preserved_across_replanning() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();

    let mut player = CombatOperator::new(player_id, "player", weapon(20.0), 10.0);
    player.accuracy = 1.0;
    player.accuracy_proficiency = 1.0;
    player.aim_state = AimState::ADS;

    let mut enemy = CombatOperator::new(enemy_id, "enemy", weapon(100_000.0), 10.0);
    enemy.accuracy = 1.0;
    enemy.accuracy_proficiency = 1.0;
    enemy.aim_state = AimState::ADS;

    let mut combat = Combat::new(player, enemy, CombatConfig { seed: 7, ..CombatConfig::default() });

    combat.submit_intents(player_id, fire_intent()).unwrap();
    combat.submit_intents(enemy_id, fire_intent()).unwrap();
    combat.begin_execution().unwrap();

    let round_one = combat.execute_until_round_end().unwrap();
    assert_eq!(round_one.phase, CombatPhase::Planning, "enemy's near-instant hit ends round one without a death");
    let round_one_hits = round_one
        .events_emitted
        .iter()
        .filter(|e| matches!(e, crate::event::SimulationEvent::DamageApplied { .. }))
        .count();
    assert_eq!(round_one_hits, 1, "only enemy's near-instant shot resolves before round one ends");

    let stand_intent = SimultaneousIntents {
        stance: StanceIntent::None,
        movement: MovementIntent::Stand,
        primary: PrimaryIntent::None,
        submitted_at_ms: 0,
    };
    combat.submit_intents(player_id, stand_intent).unwrap();
    combat.submit_intents(enemy_id, stand_intent).unwrap();
    combat.begin_execution().unwrap();

    let round_two = combat.execute_until_round_end().unwrap();
    let preserved_hit = round_two.events_emitted.iter().any(|e| {
        matches!(e, crate::event::SimulationEvent::DamageApplied { target, .. } if *target == enemy_id)
    });
    assert!(preserved_hit, "player's round-one bullet must survive the clear and still resolve on enemy");
}

/// Scenario C — mutual miss ends the round on the second miss.
///
/// Both operators carry an enormous pre-existing `current_recoil_y`, which
/// dominates the angle formula's recoil term regardless of the RNG draw —
/// guaranteeing both shots resolve outside `[0, 1]` (a miss) for any seed,
/// so the mutual-miss round-end path is exercised deterministically rather
/// than left to chance.
#[test]
fn scenario_c_mutual_miss_ends_round() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();

    let mut player = CombatOperator::new(player_id, "player", weapon(1000.0), 50.0);
    player.accuracy = 0.0;
    player.accuracy_proficiency = 0.0;
    player.current_recoil_y = 50.0;

    let mut enemy = CombatOperator::new(enemy_id, "enemy", weapon(1000.0), 50.0);
    enemy.accuracy = 0.0;
    enemy.accuracy_proficiency = 0.0;
    enemy.current_recoil_y = 50.0;

    let mut combat = Combat::new(player, enemy, CombatConfig { seed: 999, ..CombatConfig::default() });

    combat.submit_intents(player_id, fire_intent()).unwrap();
    combat.submit_intents(enemy_id, fire_intent()).unwrap();
    combat.begin_execution().unwrap();

    let outcome = combat.execute_until_round_end().unwrap();

    let miss_count = outcome
        .events_emitted
        .iter()
        .filter(|e| matches!(e, crate::event::SimulationEvent::ShotMissed { .. }))
        .count();
    let damage_count = outcome
        .events_emitted
        .iter()
        .filter(|e| matches!(e, crate::event::SimulationEvent::DamageApplied { .. }))
        .count();
    assert_eq!(miss_count, 2, "both operators' dominant recoil term forces a miss every time");
    assert_eq!(damage_count, 0);
    assert_eq!(outcome.phase, CombatPhase::Planning);
}

#[test]
fn submit_intents_rejected_outside_planning() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();
    let player = CombatOperator::new(player_id, "player", weapon(700.0), 10.0);
    let enemy = CombatOperator::new(enemy_id, "enemy", weapon(700.0), 10.0);
    let mut combat = Combat::new(player, enemy, CombatConfig::default());

    combat.begin_execution().unwrap();
    let result = combat.submit_intents(player_id, fire_intent());
    assert!(result.is_err());
}

#[test]
fn fire_with_no_ammo_is_rejected() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();
    let mut player = CombatOperator::new(player_id, "player", weapon(700.0), 10.0);
    player.current_ammo = 0;
    let enemy = CombatOperator::new(enemy_id, "enemy", weapon(700.0), 10.0);
    let mut combat = Combat::new(player, enemy, CombatConfig::default());

    let result = combat.submit_intents(player_id, fire_intent());
    assert!(result.is_err());
}

/// A target in Full cover that was visible at the start of the round draws
/// suppressive fire instead of a normal shot (§4.5). Enemy's 500 ms travel
/// time is long enough for the burst's first application (always at t=0)
/// to land, but shorter than the 1500 ms continued-fire window, so the
/// suppression it raised can't have decayed back to zero before round end.
#[test]
fn fire_at_full_cover_target_triggers_suppressive_burst() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();

    let mut player = CombatOperator::new(player_id, "player", weapon(730.0), 50.0);
    player.accuracy = 1.0;
    player.accuracy_proficiency = 1.0;

    let mut enemy = CombatOperator::new(enemy_id, "enemy", weapon(100.0), 50.0);
    enemy.accuracy = 1.0;
    enemy.accuracy_proficiency = 1.0;
    enemy.aim_state = AimState::ADS;
    enemy.cover_state = CoverLevel::Full;

    let mut combat = Combat::new(player, enemy, CombatConfig { seed: 11, ..CombatConfig::default() });

    combat.submit_intents(player_id, fire_intent()).unwrap();
    combat.submit_intents(enemy_id, fire_intent()).unwrap();
    combat.begin_execution().unwrap();

    let outcome = combat.execute_until_round_end().unwrap();

    let player_shot_normally = outcome.events_emitted.iter().any(|e| {
        matches!(e, crate::event::SimulationEvent::ShotFired { shooter, .. } if *shooter == player_id)
    });
    let player_suppressed = outcome.events_emitted.iter().any(|e| {
        matches!(e, crate::event::SimulationEvent::SuppressiveFireStarted { .. })
    });
    assert!(!player_shot_normally, "a visible, fully-covered target should never draw a normal ShotFired");
    assert!(player_suppressed, "it should instead draw a suppressive-fire burst");
    assert!(outcome.enemy_view.suppression_level > 0.0, "the burst should have raised the enemy's suppression");
}

/// Exiting Full cover starts the opponent's recognition delay and, once it
/// elapses, dispatches `TargetRecognized` (§4.6). Enemy's own shot travels
/// slowly enough that it can't end the round before recognition completes.
#[test]
fn exiting_full_cover_schedules_target_recognition() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();

    let mut player = CombatOperator::new(player_id, "player", weapon(700.0), 50.0);
    player.cover_state = CoverLevel::Full;

    let mut enemy = CombatOperator::new(enemy_id, "enemy", weapon(100.0), 50.0);
    enemy.accuracy = 1.0;
    enemy.accuracy_proficiency = 1.0;
    enemy.aim_state = AimState::ADS;

    let mut combat = Combat::new(player, enemy, CombatConfig { seed: 5, ..CombatConfig::default() });

    let take_cover = SimultaneousIntents {
        stance: StanceIntent::TakeCover { to: CoverLevel::None },
        movement: MovementIntent::Stand,
        primary: PrimaryIntent::None,
        submitted_at_ms: 0,
    };
    combat.submit_intents(player_id, take_cover).unwrap();
    combat.submit_intents(enemy_id, fire_intent()).unwrap();
    combat.begin_execution().unwrap();

    let outcome = combat.execute_until_round_end().unwrap();

    let recognized = outcome.events_emitted.iter().any(|e| {
        matches!(e, crate::event::SimulationEvent::TargetRecognized { target } if *target == player_id)
    });
    assert!(recognized, "enemy should recognize player after player exits Full cover");
    assert_eq!(outcome.player_view.cover_state, CoverLevel::Partial, "a single TakeCover step only reaches Partial");
}

#[test]
fn ammo_conserved_across_a_single_shot() {
    let player_id = OperatorId::new(1).unwrap();
    let enemy_id = OperatorId::new(2).unwrap();
    let mut player = CombatOperator::new(player_id, "player", weapon(730.0), 10.0);
    let ammo_before = player.current_ammo;
    player.accuracy = 1.0;
    player.accuracy_proficiency = 1.0;
    let enemy = CombatOperator::new(enemy_id, "enemy", weapon(730.0), 10.0);

    let mut combat = Combat::new(player, enemy, CombatConfig { seed: 1, ..CombatConfig::default() });
    combat.submit_intents(player_id, fire_intent()).unwrap();
    combat.begin_execution().unwrap();
    let outcome = combat.execute_until_round_end().unwrap();

    assert_eq!(outcome.player_view.current_ammo, ammo_before - 1);
}
