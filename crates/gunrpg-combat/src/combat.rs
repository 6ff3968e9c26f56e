//! The combat service: owns both operators, the clock, the queue, and the
//! seeded RNG, and drives the planning/execution phase machine (§4.2).

use gunrpg_core::constants::{FLINCH_DURATION_SHOTS, SLIDE_DURATION_MS};
use gunrpg_core::enums::{AimState, CombatPhase, CoverLevel, MovementState, WeaponState};
use gunrpg_core::errors::CombatError;
use gunrpg_core::ids::OperatorId;
use gunrpg_core::rng::TrackedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::CombatConfig;
use crate::cover;
use crate::event::{SimulationEvent, StepResult};
use crate::hit_resolution;
use crate::intents::{MovementIntent, PrimaryIntent, SimultaneousIntents, StanceIntent};
use crate::movement;
use crate::operator::{CombatOperator, CoverTransition};
use crate::phase;
use crate::queue::EventQueue;
use crate::suppression;
use crate::time::SimClock;

/// Result of draining the queue to the next round boundary (§6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub phase: CombatPhase,
    pub player_view: CombatOperator,
    pub enemy_view: CombatOperator,
    pub events_emitted: Vec<SimulationEvent>,
}

pub struct Combat {
    player: CombatOperator,
    enemy: CombatOperator,
    phase: CombatPhase,
    queue: EventQueue,
    clock: SimClock,
    rng: TrackedRandom,
    config: CombatConfig,
}

impl Combat {
    pub fn new(player: CombatOperator, enemy: CombatOperator, config: CombatConfig) -> Self {
        let rng = TrackedRandom::new(config.seed);
        Self {
            player,
            enemy,
            phase: CombatPhase::Planning,
            queue: EventQueue::new(),
            clock: SimClock::new(),
            rng,
            config,
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn player(&self) -> &CombatOperator {
        &self.player
    }

    pub fn enemy(&self) -> &CombatOperator {
        &self.enemy
    }

    fn operator(&self, id: OperatorId) -> Result<&CombatOperator, CombatError> {
        if id == self.player.id {
            Ok(&self.player)
        } else if id == self.enemy.id {
            Ok(&self.enemy)
        } else {
            Err(CombatError::InvalidIntent("unknown operator id".to_string()))
        }
    }

    fn operator_mut(&mut self, id: OperatorId) -> Result<&mut CombatOperator, CombatError> {
        if id == self.player.id {
            Ok(&mut self.player)
        } else if id == self.enemy.id {
            Ok(&mut self.enemy)
        } else {
            Err(CombatError::InvalidIntent("unknown operator id".to_string()))
        }
    }

    fn opponent_of(&self, id: OperatorId) -> OperatorId {
        if id == self.player.id {
            self.enemy.id
        } else {
            self.player.id
        }
    }

    /// Validates an intent against the operator's current state (§4.3):
    /// ammo must be positive to fire.
    fn validate_intents(&self, id: OperatorId, intents: &SimultaneousIntents) -> Result<(), CombatError> {
        let operator = self.operator(id)?;
        if intents.primary == PrimaryIntent::Fire && operator.current_ammo == 0 {
            return Err(CombatError::InvalidIntent("cannot fire with no ammo".to_string()));
        }
        Ok(())
    }

    pub fn submit_intents(&mut self, op_id: OperatorId, intents: SimultaneousIntents) -> Result<(), CombatError> {
        phase::require_planning(self.phase)?;
        self.validate_intents(op_id, &intents)?;
        let operator = self.operator_mut(op_id)?;
        operator.pending_intents = Some(intents);
        Ok(())
    }

    pub fn cancel_intents(&mut self, op_id: OperatorId) {
        if let Ok(operator) = self.operator_mut(op_id) {
            operator.pending_intents = None;
        }
    }

    #[instrument(skip(self), fields(player = %self.player.id, enemy = %self.enemy.id))]
    pub fn begin_execution(&mut self) -> Result<(), CombatError> {
        phase::require_planning(self.phase)?;
        let player_id = self.player.id;
        let enemy_id = self.enemy.id;

        self.queue.clear_except_in_flight_bullets(player_id);
        self.queue.clear_except_in_flight_bullets(enemy_id);
        self.player.reset_for_new_round();
        self.enemy.reset_for_new_round();

        let now = self.clock.now_ms();
        let player_intents = self.player.pending_intents.take();
        let enemy_intents = self.enemy.pending_intents.take();

        if let Some(intents) = player_intents {
            self.process_intents(player_id, intents, now);
        }
        if let Some(intents) = enemy_intents {
            self.process_intents(enemy_id, intents, now);
        }

        self.phase = CombatPhase::Executing;
        Ok(())
    }

    /// Stance -> movement -> primary, per §4.3.
    fn process_intents(&mut self, op_id: OperatorId, mut intents: SimultaneousIntents, now: u64) {
        if matches!(intents.movement, MovementIntent::Sprint { .. }) {
            intents.stance = StanceIntent::ExitADS;
        }

        let mut scheduled: Vec<(u64, SimulationEvent)> = Vec::new();

        let target_id = self.opponent_of(op_id);
        let tuning = self.config.tuning.clone();

        // A suppressive-fire burst (§4.5) replaces a normal shot when the
        // target is in Full cover but was visible within the last
        // `suppressive_fire_visibility_window_ms`. Decided before the
        // mutable borrow below so the RNG draw and the target's read-only
        // state don't conflict with `operator_mut`'s borrow of `self`.
        let suppressive_rounds = if intents.primary == PrimaryIntent::Fire {
            let target = self.operator(target_id).expect("target_id originates from this combat's own operators");
            let recently_visible = target
                .last_visible_ms
                .is_some_and(|t| now.saturating_sub(t) <= tuning.suppressive_fire_visibility_window_ms);
            if target.cover_state == CoverLevel::Full && recently_visible {
                Some(self.rng.uniform_u32_inclusive(tuning.suppressive_burst_min_rounds, tuning.suppressive_burst_max_rounds))
            } else {
                None
            }
        } else {
            None
        };

        {
            let operator = self.operator_mut(op_id).expect("op_id originates from this combat's own operators");

            match intents.stance {
                StanceIntent::EnterADS => {
                    if !operator.is_actively_firing {
                        let (_, _, ads_mult, _) = movement::multipliers(operator.movement_state);
                        let duration = (operator.weapon.ads_transition_ms as f32 * ads_mult) as u64;
                        operator.aim_state = AimState::TransitioningToADS;
                        operator.ads_transition_start_ms = Some(now);
                        operator.ads_transition_duration_ms = Some(duration);
                        scheduled.push((now + duration, SimulationEvent::ADSTransitionUpdate));
                    }
                }
                StanceIntent::ExitADS => {
                    operator.aim_state = AimState::Hip;
                    operator.ads_transition_start_ms = None;
                    operator.ads_transition_duration_ms = None;
                }
                StanceIntent::TakeCover { to } => {
                    if operator.cover_transition.is_none() {
                        if let Some(step) = cover::cover_step_toward(operator.cover_state, to) {
                            scheduled.push((
                                now,
                                SimulationEvent::CoverTransitionStarted { from: operator.cover_state, to: step },
                            ));
                        }
                    }
                }
                StanceIntent::None => {}
            }

            match intents.movement {
                MovementIntent::Stand => {
                    operator.movement_state = MovementState::Stationary;
                }
                MovementIntent::Walk { .. } => {
                    operator.movement_state = MovementState::Walking;
                    if operator.next_scheduled_movement_ms.is_none() {
                        let at = now + gunrpg_core::constants::MOVEMENT_INTERVAL_MS;
                        operator.next_scheduled_movement_ms = Some(at);
                        scheduled.push((at, SimulationEvent::MovementInterval));
                    }
                }
                MovementIntent::Sprint { .. } => {
                    operator.movement_state = MovementState::Sprinting;
                    if operator.next_scheduled_movement_ms.is_none() {
                        let at = now + gunrpg_core::constants::MOVEMENT_INTERVAL_MS;
                        operator.next_scheduled_movement_ms = Some(at);
                        scheduled.push((at, SimulationEvent::MovementInterval));
                    }
                }
                MovementIntent::Slide { toward } => {
                    operator.stamina = (operator.stamina - movement::SLIDE_STAMINA_COST).max(0.0);
                    operator.movement_state = MovementState::Sliding;
                    operator.distance_to_opponent =
                        movement::apply_slide_distance(operator.distance_to_opponent, toward);
                    scheduled.push((now + SLIDE_DURATION_MS, SimulationEvent::SlideComplete));
                }
            }

            match intents.primary {
                PrimaryIntent::Fire => {
                    operator.is_actively_firing = true;
                    if operator.next_scheduled_shot_ms.is_none() {
                        let at = if operator.movement_state == MovementState::Sprinting {
                            operator.movement_state = MovementState::Walking;
                            now + operator.weapon.sprint_to_fire_ms
                        } else {
                            now
                        };
                        operator.next_scheduled_shot_ms = Some(at);
                        if let Some(rounds) = suppressive_rounds {
                            scheduled.push((at, SimulationEvent::SuppressiveFireStarted { rounds_remaining: rounds }));
                        } else {
                            let intended = if operator.aim_state == AimState::ADS {
                                gunrpg_core::enums::BodyPart::Head
                            } else {
                                gunrpg_core::enums::BodyPart::UpperTorso
                            };
                            scheduled.push((
                                at,
                                SimulationEvent::ShotFired { shooter: op_id, target: target_id, intended_part: intended },
                            ));
                        }
                    }
                }
                PrimaryIntent::Reload => {
                    operator.weapon_state = WeaponState::Reloading;
                    scheduled.push((now + operator.weapon.reload_ms, SimulationEvent::ReloadComplete));
                }
                PrimaryIntent::None => {}
            }
        }

        for (at, event) in scheduled {
            let seq = self.queue.next_sequence();
            self.queue.schedule(at, op_id, seq, event);
        }
    }

    /// Drains the queue until a round-end condition is reached or the
    /// queue empties without one (§4.2, §7's `SimulationExhaustion`).
    #[instrument(skip(self), fields(player = %self.player.id, enemy = %self.enemy.id))]
    pub fn execute_until_round_end(&mut self) -> Result<RoundOutcome, CombatError> {
        if self.phase != CombatPhase::Executing {
            return Err(CombatError::PhaseViolation);
        }

        let mut round_events = Vec::new();

        loop {
            let Some((time, operator_id, event)) = self.queue.dequeue() else {
                self.phase = CombatPhase::Planning;
                return Err(CombatError::SimulationExhaustion);
            };

            let previous_time = self.clock.now_ms();
            self.clock.advance_to(time);
            let elapsed = time.saturating_sub(previous_time);

            let tuning = self.config.tuning.clone();
            self.player.tick(elapsed, time, &tuning);
            self.enemy.tick(elapsed, time, &tuning);

            let (player_id, enemy_id) = (self.player.id, self.enemy.id);
            let mut ctx = ExecutionContext {
                player: &mut self.player,
                enemy: &mut self.enemy,
                player_id,
                enemy_id,
                queue: &mut self.queue,
                rng: &mut self.rng,
                tuning: &tuning,
                now_ms: time,
                acting_operator: operator_id,
            };

            let result = event.execute(&mut ctx);

            if self.config.verbose_shot_logs {
                debug!(?event, %operator_id, time, "combat event dispatched");
            }

            round_events.push(event);

            if result.combat_ended {
                self.phase = CombatPhase::Ended;
                break;
            }
            if result.ends_round {
                self.phase = CombatPhase::Planning;
                break;
            }
        }

        Ok(RoundOutcome {
            phase: self.phase,
            player_view: self.player.clone(),
            enemy_view: self.enemy.clone(),
            events_emitted: round_events,
        })
    }
}

/// Borrowed execution context passed to [`SimulationEvent::execute`].
///
/// Events carry only `OperatorId`s, never references to the queue or the
/// other operator directly — this is the replacement for the source's
/// `ShotFiredEvent` holding a live reference to the queue and both
/// combatants (§9's "cyclic references" design note).
pub struct ExecutionContext<'a> {
    pub player: &'a mut CombatOperator,
    pub enemy: &'a mut CombatOperator,
    player_id: OperatorId,
    enemy_id: OperatorId,
    pub queue: &'a mut EventQueue,
    pub rng: &'a mut TrackedRandom,
    pub tuning: &'a gunrpg_core::constants::TuningConfig,
    pub now_ms: u64,
    pub acting_operator: OperatorId,
}

impl<'a> ExecutionContext<'a> {
    fn get_mut(&mut self, id: OperatorId) -> &mut CombatOperator {
        if id == self.player_id {
            &mut *self.player
        } else {
            &mut *self.enemy
        }
    }

    fn get(&self, id: OperatorId) -> &CombatOperator {
        if id == self.player_id {
            &*self.player
        } else {
            &*self.enemy
        }
    }

    fn opponent_of(&self, id: OperatorId) -> OperatorId {
        if id == self.player_id {
            self.enemy_id
        } else {
            self.player_id
        }
    }

    fn schedule_for(&mut self, operator_id: OperatorId, at: u64, event: SimulationEvent) {
        let seq = self.queue.next_sequence();
        self.queue.schedule(at, operator_id, seq, event);
    }

    pub fn resolve_shot(
        &mut self,
        shooter_id: OperatorId,
        target_id: OperatorId,
        intended_part: gunrpg_core::enums::BodyPart,
    ) -> StepResult {
        let now = self.now_ms;
        let (accuracy, recoil_y, vertical_recoil, distance, velocity, rpm, movement_state) = {
            let shooter = self.get(shooter_id);
            (
                shooter.accuracy,
                shooter.current_recoil_y,
                shooter.weapon.vertical_recoil,
                shooter.distance_to_opponent,
                shooter.weapon.bullet_velocity_mps,
                shooter.weapon.rounds_per_minute,
                shooter.movement_state,
            )
        };
        let ap = self.get(shooter_id).effective_accuracy_proficiency();

        // Recognition delay (§4.6): while the shooter is still noticing a
        // target that just exited Full cover, its effective accuracy is
        // scaled by a 0.3 -> 1.0 interpolation over the delay window.
        let recognition_multiplier = {
            let shooter = self.get(shooter_id);
            match (shooter.recognition_target_id, shooter.recognition_delay_end_ms) {
                (Some(recognized), Some(end)) if recognized == target_id && now < end => {
                    let total =
                        cover::recognition_delay_ms(shooter.accuracy_proficiency, shooter.suppression_level, self.tuning)
                            .max(1);
                    let remaining = end.saturating_sub(now);
                    let progress = 1.0 - (remaining as f32 / total as f32).clamp(0.0, 1.0);
                    cover::recognition_accuracy_multiplier(progress)
                }
                _ => 1.0,
            }
        };
        let effective_accuracy = (accuracy * recognition_multiplier).clamp(0.0, 1.0);

        let angle = hit_resolution::resolve_angle(
            intended_part,
            effective_accuracy,
            ap,
            recoil_y,
            vertical_recoil,
            self.rng,
            self.tuning,
        );

        let recovery_mult = hit_resolution::recoil_recovery_multiplier(ap, self.tuning);
        {
            let shooter = self.get_mut(shooter_id);
            shooter.current_ammo = shooter.current_ammo.saturating_sub(1);
            shooter.shots_fired_count += 1;
            shooter.current_recoil_y += vertical_recoil;
            shooter.current_recoil_y = (shooter.current_recoil_y * (1.0 - 0.1 * recovery_mult)).max(0.0);

            if shooter.flinch_shots_remaining > 0 {
                shooter.flinch_shots_remaining -= 1;
                if shooter.flinch_shots_remaining == 0 {
                    shooter.flinch_severity = 0.0;
                }
            }
        }

        let travel_ms = hit_resolution::travel_time_ms(distance, velocity);
        let impact_time = now + travel_ms;

        match hit_resolution::angle_to_result(angle) {
            Some(body_part) => {
                let weapon_damage = self.get(shooter_id).weapon.damage_at(distance, body_part);
                self.schedule_for(
                    shooter_id,
                    impact_time,
                    SimulationEvent::DamageApplied { target: target_id, body_part, damage: weapon_damage },
                );
            }
            None => {
                self.schedule_for(shooter_id, impact_time, SimulationEvent::ShotMissed { shooter: shooter_id });
                if hit_resolution::is_near_miss(angle, self.tuning) {
                    self.apply_suppression_from_shot(shooter_id, target_id, distance, rpm, movement_state, impact_time);
                }
            }
        }

        // Continuation: only the acting operator's own timeline continues.
        let (still_firing, has_ammo, ready) = {
            let shooter = self.get(shooter_id);
            (shooter.is_actively_firing, shooter.current_ammo > 0, shooter.weapon_state == gunrpg_core::enums::WeaponState::Ready)
        };
        if still_firing && has_ammo && ready {
            let interval_ms = if rpm > 0.0 { (60_000.0 / rpm) as u64 } else { u64::MAX };
            let next_at = now + interval_ms;
            self.get_mut(shooter_id).next_scheduled_shot_ms = Some(next_at);
            self.schedule_for(
                shooter_id,
                next_at,
                SimulationEvent::ShotFired { shooter: shooter_id, target: target_id, intended_part },
            );
        } else {
            self.get_mut(shooter_id).next_scheduled_shot_ms = None;
        }

        StepResult::default()
    }

    /// Applies suppression from a near-miss shot (§4.5) to the target.
    /// Keyed on the shooter's own movement state per [`movement::multipliers`]'s
    /// fourth return value.
    fn apply_suppression_from_shot(
        &mut self,
        shooter_id: OperatorId,
        target_id: OperatorId,
        distance: f32,
        rpm: f32,
        shooter_movement: MovementState,
        impact_time: u64,
    ) {
        let suppression_factor = self.get(shooter_id).weapon.suppression_factor;
        let rpm_factor = (rpm / 600.0).clamp(0.5, 2.0);
        let distance_factor = (1.0 - (distance / 100.0)).clamp(0.1, 1.0);
        let (_, _, _, movement_factor) = movement::multipliers(shooter_movement);
        let posture_factor = self.get(target_id).cover_state.visibility();

        let applied = suppression::near_miss_application(
            suppression_factor,
            rpm_factor,
            distance_factor,
            movement_factor,
            posture_factor,
        );
        if applied <= 0.0 {
            return;
        }

        if self.get(target_id).suppression_level <= 0.0 {
            self.schedule_for(target_id, impact_time, SimulationEvent::SuppressionStarted { observer: shooter_id });
        }
        self.schedule_for(target_id, impact_time, SimulationEvent::SuppressionUpdated { level: applied });
    }

    pub fn apply_damage(
        &mut self,
        target_id: OperatorId,
        body_part: gunrpg_core::enums::BodyPart,
        damage: f32,
    ) -> StepResult {
        let target = self.get_mut(target_id);
        target.health = (target.health - damage).max(0.0);
        let normalized = (damage / target.max_health).clamp(0.0, 1.0);
        target.flinch_severity = (normalized * (1.0 - target.weapon.flinch_resistance)).clamp(0.0, 1.0);
        target.flinch_shots_remaining = FLINCH_DURATION_SHOTS;
        let _ = body_part;

        StepResult { ends_round: true, combat_ended: target.is_dead() }
    }

    pub fn record_miss(&mut self, shooter_id: OperatorId) -> StepResult {
        self.get_mut(shooter_id).missed_this_round = true;
        let opponent_id = self.opponent_of(shooter_id);
        let opponent_missed = self.get(opponent_id).missed_this_round;
        StepResult { ends_round: opponent_missed, combat_ended: false }
    }

    pub fn complete_reload(&mut self) -> StepResult {
        let operator = self.get_mut(self.acting_operator);
        operator.current_ammo = operator.weapon.magazine_size;
        operator.weapon_state = gunrpg_core::enums::WeaponState::Ready;
        StepResult::default()
    }

    pub fn complete_ads_transition(&mut self) -> StepResult {
        let operator = self.get_mut(self.acting_operator);
        operator.aim_state = AimState::ADS;
        StepResult::default()
    }

    pub fn tick_movement(&mut self) -> StepResult {
        let id = self.acting_operator;
        let (still_moving, state) = {
            let operator = self.get(id);
            (
                matches!(operator.movement_state, MovementState::Walking | MovementState::Sprinting),
                operator.movement_state,
            )
        };
        let operator = self.get_mut(id);
        operator.next_scheduled_movement_ms = None;
        if still_moving {
            let next_at = self.now_ms + gunrpg_core::constants::MOVEMENT_INTERVAL_MS;
            self.get_mut(id).next_scheduled_movement_ms = Some(next_at);
            self.schedule_for(id, next_at, SimulationEvent::MovementInterval);
        }
        let _ = state;
        StepResult::default()
    }

    pub fn complete_slide(&mut self) -> StepResult {
        let operator = self.get_mut(self.acting_operator);
        operator.movement_state = MovementState::Stationary;
        StepResult::default()
    }

    pub fn start_cover_transition(&mut self, from: CoverLevel, to: CoverLevel) -> StepResult {
        let now = self.now_ms;
        let duration = cover::transition_duration_ms(from, to, self.tuning);
        let operator = self.get_mut(self.acting_operator);
        operator.cover_transition = Some(CoverTransition { from, to, start_ms: now, end_ms: now + duration });
        operator.cover_state = CoverLevel::Partial;
        self.schedule_for(self.acting_operator, now + duration, SimulationEvent::CoverTransitionCompleted { to });
        StepResult::default()
    }

    pub fn complete_cover_transition(&mut self, to: CoverLevel) -> StepResult {
        let id = self.acting_operator;
        let from = self.get(id).cover_transition.map(|t| t.from);
        {
            let operator = self.get_mut(id);
            operator.cover_state = to;
            operator.cover_transition = None;
        }

        // Exiting Full cover (§4.6) starts the opponent's recognition delay:
        // its accuracy against this operator is degraded until it notices.
        if from == Some(CoverLevel::Full) && to != CoverLevel::Full {
            let observer_id = self.opponent_of(id);
            let (observer_ap, observer_suppression) = {
                let observer = self.get(observer_id);
                (observer.accuracy_proficiency, observer.suppression_level)
            };
            let delay = cover::recognition_delay_ms(observer_ap, observer_suppression, self.tuning);
            let end_ms = self.now_ms + delay;
            {
                let observer = self.get_mut(observer_id);
                observer.recognition_delay_end_ms = Some(end_ms);
                observer.recognition_target_id = Some(id);
            }
            self.schedule_for(observer_id, end_ms, SimulationEvent::TargetRecognized { target: id });
        }

        StepResult::default()
    }

    pub fn begin_suppression(&mut self, observer: OperatorId) -> StepResult {
        let now_ms = self.now_ms;
        let target = self.get_mut(self.acting_operator);
        target.last_suppression_application_ms = Some(now_ms);
        let _ = observer;
        StepResult::default()
    }

    pub fn update_suppression(&mut self, level: f32) -> StepResult {
        let target_id = self.acting_operator;
        let now = self.now_ms;
        let target = self.get_mut(target_id);
        target.suppression_level = suppression::combine(target.suppression_level, level);
        target.last_suppression_application_ms = Some(now);

        // Schedules its own decay check; a later application before this
        // fires leaves `last_suppression_application_ms` too recent for
        // `decay_has_resumed`, making this particular check a no-op.
        let window = self.tuning.suppression_continued_fire_window_ms;
        self.schedule_for(target_id, now + window, SimulationEvent::SuppressionEnded);
        StepResult::default()
    }

    pub fn end_suppression(&mut self) -> StepResult {
        let now = self.now_ms;
        let tuning = self.tuning;
        let target = self.get_mut(self.acting_operator);
        if let Some(last) = target.last_suppression_application_ms {
            if suppression::decay_has_resumed(now.saturating_sub(last), tuning) {
                target.suppression_level = 0.0;
                target.last_suppression_application_ms = None;
            }
        }
        StepResult::default()
    }

    pub fn continue_suppressive_fire(&mut self, rounds_remaining: u32) -> StepResult {
        if rounds_remaining == 0 {
            return self.complete_suppressive_fire();
        }
        let shooter_id = self.acting_operator;
        let target_id = self.opponent_of(shooter_id);
        let applied = self.tuning.suppression_near_miss_angle;
        let now = self.now_ms;

        if self.get(target_id).suppression_level <= 0.0 {
            self.schedule_for(target_id, now, SimulationEvent::SuppressionStarted { observer: shooter_id });
        }
        self.schedule_for(target_id, now, SimulationEvent::SuppressionUpdated { level: applied });
        self.schedule_for(
            shooter_id,
            now + 150,
            SimulationEvent::SuppressiveFireStarted { rounds_remaining: rounds_remaining - 1 },
        );
        StepResult::default()
    }

    pub fn complete_suppressive_fire(&mut self) -> StepResult {
        let operator = self.get_mut(self.acting_operator);
        operator.is_actively_firing = false;
        StepResult::default()
    }

    pub fn recognize_target(&mut self, target: OperatorId) -> StepResult {
        let observer = self.get_mut(self.acting_operator);
        observer.recognition_target_id = Some(target);
        observer.recognition_delay_end_ms = None;
        StepResult::default()
    }
}
