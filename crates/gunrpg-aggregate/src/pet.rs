//! Background pet decay and action application (§4.9).

use gunrpg_core::constants::{
    PET_FATIGUE_PER_HOUR, PET_HEALTH_DECAY_PER_HOUR, PET_HUNGER_CRITICAL, PET_HUNGER_PER_HOUR,
    PET_HYDRATION_CRITICAL, PET_HYDRATION_PER_HOUR, PET_INJURY_CRITICAL, PET_INJURY_STRESS_COEFF,
    PET_MIN_RECOVERY_MULTIPLIER, PET_MORALE_DECAY_PER_HOUR, PET_MORALE_HEALTH_DECAY_MULT,
    PET_MORALE_STRESS_THRESHOLD, PET_REST_FATIGUE_PER_HOUR, PET_REST_HEALTH_PER_HOUR,
    PET_REST_STRESS_PER_HOUR, PET_STRESS_FATIGUE_ACCEL, PET_STRESS_FATIGUE_THRESHOLD,
    PET_STRESS_PER_HOUR,
};
use serde::{Deserialize, Serialize};

/// Pet stats. All fields are clamped to `[0, 100]` after every `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub health: f32,
    pub fatigue: f32,
    pub injury: f32,
    pub stress: f32,
    pub morale: f32,
    pub hunger: f32,
    pub hydration: f32,
    pub last_updated: u64,
}

impl PetState {
    /// Healthy defaults for a freshly created operator.
    pub fn healthy_defaults(now: u64) -> Self {
        Self {
            health: 100.0,
            fatigue: 0.0,
            injury: 0.0,
            stress: 0.0,
            morale: 100.0,
            hunger: 0.0,
            hydration: 100.0,
            last_updated: now,
        }
    }

    fn clamp_all(&mut self) {
        self.health = self.health.clamp(0.0, 100.0);
        self.fatigue = self.fatigue.clamp(0.0, 100.0);
        self.injury = self.injury.clamp(0.0, 100.0);
        self.stress = self.stress.clamp(0.0, 100.0);
        self.morale = self.morale.clamp(0.0, 100.0);
        self.hunger = self.hunger.clamp(0.0, 100.0);
        self.hydration = self.hydration.clamp(0.0, 100.0);
    }
}

/// An action applied to a pet on top of background decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PetInput {
    Rest { duration_hours: f32 },
    Eat { nutrition: f32 },
    Drink { hydration: f32 },
    Mission { stress_load: f32, injury_risk: f32 },
}

/// Stateless rule application: `PetRules::apply(state, input, now)`.
pub struct PetRules;

impl PetRules {
    pub fn apply(state: &PetState, input: PetInput, now: u64) -> PetState {
        let mut next = *state;
        let elapsed_hours = now.saturating_sub(state.last_updated) as f32 / 3_600_000.0;

        // Background decay.
        next.hunger += PET_HUNGER_PER_HOUR * elapsed_hours;
        next.hydration -= PET_HYDRATION_PER_HOUR * elapsed_hours;
        let mut fatigue_rate = PET_FATIGUE_PER_HOUR;
        if next.stress > PET_STRESS_FATIGUE_THRESHOLD {
            fatigue_rate *= PET_STRESS_FATIGUE_ACCEL;
        }
        next.fatigue += fatigue_rate * elapsed_hours;
        next.stress += PET_STRESS_PER_HOUR * elapsed_hours;
        next.stress += next.injury * PET_INJURY_STRESS_COEFF * elapsed_hours;

        if next.stress > PET_MORALE_STRESS_THRESHOLD {
            next.morale -= PET_MORALE_DECAY_PER_HOUR * elapsed_hours;
        }

        let critical = next.hunger > PET_HUNGER_CRITICAL
            || next.hydration < PET_HYDRATION_CRITICAL
            || next.injury > PET_INJURY_CRITICAL;
        if critical {
            next.health -= PET_HEALTH_DECAY_PER_HOUR * elapsed_hours;
            next.morale -= PET_HEALTH_DECAY_PER_HOUR * elapsed_hours * PET_MORALE_HEALTH_DECAY_MULT;
        }

        // Input.
        match input {
            PetInput::Rest { duration_hours } => {
                let injury_damp = (1.0 - next.injury / 100.0).max(PET_MIN_RECOVERY_MULTIPLIER);
                let hunger_hydration_damp =
                    (1.0 - (next.hunger / 100.0 + (100.0 - next.hydration) / 100.0) / 2.0)
                        .max(PET_MIN_RECOVERY_MULTIPLIER);
                let stress_damp = (1.0 - next.stress / 100.0).max(PET_MIN_RECOVERY_MULTIPLIER);

                next.health += PET_REST_HEALTH_PER_HOUR * duration_hours * injury_damp;
                next.fatigue -= PET_REST_FATIGUE_PER_HOUR * duration_hours * stress_damp;
                next.stress -= PET_REST_STRESS_PER_HOUR * duration_hours * hunger_hydration_damp;
            }
            PetInput::Eat { nutrition } => {
                next.hunger -= nutrition;
            }
            PetInput::Drink { hydration } => {
                next.hydration += hydration;
            }
            PetInput::Mission { stress_load, injury_risk } => {
                next.stress += stress_load;
                next.injury += injury_risk;
            }
        }

        next.clamp_all();
        next.last_updated = now;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_always_land_in_unit_range() {
        let state = PetState::healthy_defaults(0);
        let next = PetRules::apply(&state, PetInput::Mission { stress_load: 1000.0, injury_risk: 1000.0 }, 10_000);
        assert!((0.0..=100.0).contains(&next.health));
        assert!((0.0..=100.0).contains(&next.stress));
        assert!((0.0..=100.0).contains(&next.injury));
    }

    #[test]
    fn rest_improves_health_and_reduces_fatigue() {
        let mut state = PetState::healthy_defaults(0);
        state.fatigue = 50.0;
        state.health = 50.0;
        let next = PetRules::apply(&state, PetInput::Rest { duration_hours: 4.0 }, 0);
        assert!(next.health >= state.health);
        assert!(next.fatigue <= state.fatigue);
    }

    #[test]
    fn last_updated_advances_to_now() {
        let state = PetState::healthy_defaults(0);
        let next = PetRules::apply(&state, PetInput::Eat { nutrition: 5.0 }, 5000);
        assert_eq!(next.last_updated, 5000);
    }

    #[test]
    fn eat_reduces_hunger() {
        let mut state = PetState::healthy_defaults(0);
        state.hunger = 50.0;
        let next = PetRules::apply(&state, PetInput::Eat { nutrition: 20.0 }, 0);
        assert!(next.hunger < 50.0);
    }
}
