//! Tagged simulation events.
//!
//! Each variant implements its behavior through [`SimulationEvent::execute`],
//! called with a borrowed [`crate::combat::ExecutionContext`] rather than
//! owning a reference to the queue or the operators itself — the original
//! inheritance-based event classes held a reference to the queue and both
//! combatants directly, which this sum type replaces with indices resolved
//! at dispatch time.

use gunrpg_core::enums::{BodyPart, CoverLevel};
use gunrpg_core::ids::OperatorId;
use serde::{Deserialize, Serialize};

use crate::combat::ExecutionContext;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    ShotFired {
        shooter: OperatorId,
        target: OperatorId,
        intended_part: BodyPart,
    },
    DamageApplied {
        target: OperatorId,
        body_part: BodyPart,
        damage: f32,
    },
    ShotMissed {
        shooter: OperatorId,
    },
    ReloadComplete,
    ADSTransitionUpdate,
    MovementInterval,
    SlideComplete,
    CoverTransitionStarted {
        from: CoverLevel,
        to: CoverLevel,
    },
    CoverTransitionCompleted {
        to: CoverLevel,
    },
    SuppressionStarted {
        observer: OperatorId,
    },
    SuppressionUpdated {
        level: f32,
    },
    SuppressionEnded,
    SuppressiveFireStarted {
        rounds_remaining: u32,
    },
    SuppressiveFireCompleted,
    TargetRecognized {
        target: OperatorId,
    },
    MicroReaction,
}

/// Outcome of executing a single event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Set when this event satisfies the round-end policy (§4.2).
    pub ends_round: bool,
    /// Set when the event pushed the combat into `Ended` (an operator died).
    pub combat_ended: bool,
}

impl SimulationEvent {
    /// Operator whose timeline this event belongs to, for logging and for
    /// the continuation predicate in §4.3.
    pub fn owning_operator(&self, current_owner: OperatorId) -> OperatorId {
        match self {
            SimulationEvent::ShotFired { shooter, .. } => *shooter,
            SimulationEvent::ShotMissed { shooter } => *shooter,
            SimulationEvent::DamageApplied { target, .. } => *target,
            _ => current_owner,
        }
    }

    pub fn execute(&self, ctx: &mut ExecutionContext<'_>) -> StepResult {
        match self {
            SimulationEvent::ShotFired { shooter, target, intended_part } => {
                ctx.resolve_shot(*shooter, *target, *intended_part)
            }
            SimulationEvent::DamageApplied { target, body_part, damage } => {
                ctx.apply_damage(*target, *body_part, *damage)
            }
            SimulationEvent::ShotMissed { shooter } => ctx.record_miss(*shooter),
            SimulationEvent::ReloadComplete => ctx.complete_reload(),
            SimulationEvent::ADSTransitionUpdate => ctx.complete_ads_transition(),
            SimulationEvent::MovementInterval => ctx.tick_movement(),
            SimulationEvent::SlideComplete => ctx.complete_slide(),
            SimulationEvent::CoverTransitionStarted { from, to } => {
                ctx.start_cover_transition(*from, *to)
            }
            SimulationEvent::CoverTransitionCompleted { to } => ctx.complete_cover_transition(*to),
            SimulationEvent::SuppressionStarted { observer } => ctx.begin_suppression(*observer),
            SimulationEvent::SuppressionUpdated { level } => ctx.update_suppression(*level),
            SimulationEvent::SuppressionEnded => ctx.end_suppression(),
            SimulationEvent::SuppressiveFireStarted { rounds_remaining } => {
                ctx.continue_suppressive_fire(*rounds_remaining)
            }
            SimulationEvent::SuppressiveFireCompleted => ctx.complete_suppressive_fire(),
            SimulationEvent::TargetRecognized { target } => ctx.recognize_target(*target),
            SimulationEvent::MicroReaction => StepResult::default(),
        }
    }
}
