//! Snapshot/outcome bridge between the operator aggregate and the combat
//! simulator. Combat never mutates the aggregate directly: the aggregate
//! produces a snapshot before infil, combat runs against it, and the
//! aggregate appends the outcome as a new event afterward.

use gunrpg_aggregate::{AggregateCommand, OperatorAggregate};
use gunrpg_combat::{CombatOperator, RoundOutcome};
use gunrpg_core::enums::CombatPhase;
use gunrpg_core::errors::AggregateError;
use gunrpg_core::ids::OperatorId;
use gunrpg_core::weapon::Weapon;
use serde::{Deserialize, Serialize};

/// The ephemeral, mutable combat-only copy of an operator, derived from its
/// aggregate immediately before infil.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub operator_id: OperatorId,
    pub name: String,
    pub health: f32,
    pub max_health: f32,
    pub equipped_weapon_name: String,
}

/// Builds a [`CombatSnapshot`] from an aggregate's current state.
pub fn snapshot_for_combat(aggregate: &OperatorAggregate) -> CombatSnapshot {
    CombatSnapshot {
        operator_id: aggregate.id,
        name: aggregate.name.clone(),
        health: aggregate.current_health,
        max_health: aggregate.max_health,
        equipped_weapon_name: aggregate.equipped_weapon_name.clone(),
    }
}

/// Turns a [`CombatSnapshot`] plus a weapon lookup into the
/// [`CombatOperator`] the kernel actually runs against.
pub fn combat_operator_from_snapshot(snapshot: &CombatSnapshot, weapon: Weapon, distance_to_opponent: f32) -> CombatOperator {
    let mut operator = CombatOperator::new(snapshot.operator_id, snapshot.name.clone(), weapon, distance_to_opponent);
    operator.health = snapshot.health;
    operator.max_health = snapshot.max_health;
    operator
}

/// Turns a finished round's outcome back into the aggregate command that
/// records it. Only reachable terminal states translate into a command —
/// a round that returned to `Planning` without ending combat has nothing
/// to append yet.
pub fn outcome_to_command(outcome: &RoundOutcome, tracked_operator: OperatorId) -> Option<AggregateCommand> {
    if outcome.phase != CombatPhase::Ended {
        return None;
    }
    let view = if outcome.player_view.id == tracked_operator {
        &outcome.player_view
    } else {
        &outcome.enemy_view
    };
    if view.is_dead() {
        Some(AggregateCommand::Die)
    } else {
        None
    }
}

/// Appends the command derived from `outcome` (if any) to `aggregate`.
pub fn append_outcome(
    aggregate: &mut OperatorAggregate,
    outcome: &RoundOutcome,
    tracked_operator: OperatorId,
    now: u64,
) -> Result<(), AggregateError> {
    match outcome_to_command(outcome, tracked_operator) {
        Some(command) => aggregate.append(command, now).map(|_| ()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunrpg_core::ids::OperatorId;

    fn sample_weapon() -> Weapon {
        Weapon {
            name: "M4A1".to_string(),
            rounds_per_minute: 700.0,
            magazine_size: 30,
            reload_ms: 2000,
            damage_bands: vec![gunrpg_core::weapon::DamageBand::new(0.0, f32::INFINITY, 30.0)],
            headshot_multiplier: 3.0,
            bullet_velocity_mps: 800.0,
            hipfire_spread: 3.0,
            ads_spread: 1.0,
            vertical_recoil: 0.3,
            recoil_recovery_ms: 300,
            ads_transition_ms: 250,
            sprint_to_fire_ms: 300,
            suppression_factor: 0.1,
            flinch_resistance: 0.0,
        }
    }

    #[test]
    fn snapshot_carries_aggregate_identity_and_health() {
        let id = OperatorId::new(1).unwrap();
        let (mut aggregate, _) = OperatorAggregate::create(id, "Reyes", 0).unwrap();
        aggregate
            .append(gunrpg_aggregate::AggregateCommand::ChangeLoadout { weapon_name: "M4A1".to_string() }, 1)
            .unwrap();

        let snapshot = snapshot_for_combat(&aggregate);
        assert_eq!(snapshot.operator_id, id);
        assert_eq!(snapshot.equipped_weapon_name, "M4A1");
        assert_eq!(snapshot.health, aggregate.current_health);
    }

    #[test]
    fn combat_operator_inherits_snapshot_health() {
        let id = OperatorId::new(1).unwrap();
        let (aggregate, _) = OperatorAggregate::create(id, "Reyes", 0).unwrap();
        let snapshot = snapshot_for_combat(&aggregate);
        let operator = combat_operator_from_snapshot(&snapshot, sample_weapon(), 15.0);
        assert_eq!(operator.health, snapshot.health);
        assert_eq!(operator.distance_to_opponent, 15.0);
    }
}
