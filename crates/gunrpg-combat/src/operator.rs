//! Ephemeral, simulation-only operator snapshot.

use gunrpg_core::enums::{AimState, CoverLevel, MovementState, WeaponState};
use gunrpg_core::ids::OperatorId;
use gunrpg_core::weapon::Weapon;
use serde::{Deserialize, Serialize};

use crate::hit_resolution;
use crate::intents::SimultaneousIntents;
use crate::suppression;

/// A cover transition in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverTransition {
    pub from: CoverLevel,
    pub to: CoverLevel,
    pub start_ms: u64,
    pub end_ms: u64,
}

/// Mutable per-round combat state for one operator.
///
/// Lives as a plain field on [`crate::combat::Combat`] rather than an ECS
/// entity: combat is always exactly two operators, never a dynamic
/// population, so there is nothing for an entity registry to buy here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatOperator {
    pub id: OperatorId,
    pub name: String,

    pub health: f32,
    pub max_health: f32,
    pub stamina: f32,
    pub fatigue: f32,
    pub distance_to_opponent: f32,

    pub movement_state: MovementState,

    pub aim_state: AimState,
    pub ads_transition_start_ms: Option<u64>,
    pub ads_transition_duration_ms: Option<u64>,

    pub weapon_state: WeaponState,
    pub weapon: Weapon,

    pub cover_state: CoverLevel,
    pub cover_transition: Option<CoverTransition>,

    pub current_ammo: u32,
    pub current_recoil_y: f32,
    pub recoil_recovery_start_ms: Option<u64>,

    pub accuracy: f32,
    pub accuracy_proficiency: f32,

    pub flinch_severity: f32,
    pub flinch_shots_remaining: u32,
    pub suppression_level: f32,
    pub last_suppression_application_ms: Option<u64>,

    pub recognition_delay_end_ms: Option<u64>,
    pub recognition_target_id: Option<OperatorId>,

    /// Last sim-time this operator was not in Full cover, used by the
    /// suppressive-fire "visible within the last 3 s" eligibility check
    /// (§4.5).
    pub last_visible_ms: Option<u64>,

    pub is_actively_firing: bool,
    pub shots_fired_count: u32,

    pub pending_intents: Option<SimultaneousIntents>,
    pub next_scheduled_shot_ms: Option<u64>,
    pub next_scheduled_movement_ms: Option<u64>,

    /// Set once per round when this operator records a `ShotMissed`, used
    /// by the round-end policy's "both operators missed" condition.
    pub missed_this_round: bool,
}

impl CombatOperator {
    pub fn new(id: OperatorId, name: impl Into<String>, weapon: Weapon, distance_to_opponent: f32) -> Self {
        let magazine = weapon.magazine_size;
        Self {
            id,
            name: name.into(),
            health: gunrpg_core::constants::DEFAULT_MAX_HEALTH,
            max_health: gunrpg_core::constants::DEFAULT_MAX_HEALTH,
            stamina: 100.0,
            fatigue: 0.0,
            distance_to_opponent,
            movement_state: MovementState::Stationary,
            aim_state: AimState::Hip,
            ads_transition_start_ms: None,
            ads_transition_duration_ms: None,
            weapon_state: WeaponState::Ready,
            weapon,
            cover_state: CoverLevel::None,
            cover_transition: None,
            current_ammo: magazine,
            current_recoil_y: 0.0,
            recoil_recovery_start_ms: None,
            accuracy: 1.0,
            accuracy_proficiency: 1.0,
            flinch_severity: 0.0,
            flinch_shots_remaining: 0,
            suppression_level: 0.0,
            last_suppression_application_ms: None,
            recognition_delay_end_ms: None,
            recognition_target_id: None,
            last_visible_ms: Some(0),
            is_actively_firing: false,
            shots_fired_count: 0,
            pending_intents: None,
            next_scheduled_shot_ms: None,
            next_scheduled_movement_ms: None,
            missed_this_round: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Effective accuracy proficiency: base proficiency attenuated first by
    /// flinch, then by suppression, composed in that order (§4.4).
    pub fn effective_accuracy_proficiency(&self) -> f32 {
        let flinch_attenuated = self.accuracy_proficiency * (1.0 - self.flinch_severity).max(0.0);
        let suppression_attenuated = flinch_attenuated * (1.0 - self.suppression_level).max(0.0);
        suppression_attenuated.clamp(0.0, 1.0)
    }

    pub fn reset_for_new_round(&mut self) {
        self.missed_this_round = false;
    }

    /// Advances this operator's regeneration and decay models by
    /// `elapsed_ms` (§4.2's "advance time, update regen/decay, execute,
    /// then decide round-end"): continuous recoil recovery and suppression
    /// decay, plus refreshing `last_visible_ms` while not in Full cover.
    pub fn tick(&mut self, elapsed_ms: u64, now_ms: u64, tuning: &gunrpg_core::constants::TuningConfig) {
        if self.cover_state != CoverLevel::Full {
            self.last_visible_ms = Some(now_ms);
        }

        if elapsed_ms == 0 {
            return;
        }

        if self.weapon.recoil_recovery_ms > 0 {
            let recovery_mult = hit_resolution::recoil_recovery_multiplier(self.effective_accuracy_proficiency(), tuning);
            let fraction = ((elapsed_ms as f32 / self.weapon.recoil_recovery_ms as f32) * recovery_mult).min(1.0);
            self.current_recoil_y = (self.current_recoil_y * (1.0 - fraction)).max(0.0);
        }

        if let Some(last) = self.last_suppression_application_ms {
            let since_last_application = now_ms.saturating_sub(last);
            if suppression::decay_has_resumed(since_last_application, tuning) {
                self.suppression_level = suppression::decay(self.suppression_level, elapsed_ms, tuning);
            }
        }
    }
}
