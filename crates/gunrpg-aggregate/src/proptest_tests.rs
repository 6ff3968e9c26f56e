use proptest::prelude::*;

use crate::pet::{PetInput, PetRules, PetState};

fn arb_pet_state() -> impl Strategy<Value = PetState> {
    (0.0f32..=100.0, 0.0f32..=100.0, 0.0f32..=100.0, 0.0f32..=100.0, 0.0f32..=100.0, 0.0f32..=100.0, 0.0f32..=100.0)
        .prop_map(|(health, fatigue, injury, stress, morale, hunger, hydration)| PetState {
            health,
            fatigue,
            injury,
            stress,
            morale,
            hunger,
            hydration,
            last_updated: 0,
        })
}

proptest! {
    #[test]
    fn pet_stats_always_land_in_unit_range(
        state in arb_pet_state(),
        elapsed_ms in 0u64..1_000_000_000,
        stress_load in 0.0f32..200.0,
        injury_risk in 0.0f32..200.0,
    ) {
        let next = PetRules::apply(&state, PetInput::Mission { stress_load, injury_risk }, elapsed_ms);
        prop_assert!((0.0..=100.0).contains(&next.health));
        prop_assert!((0.0..=100.0).contains(&next.fatigue));
        prop_assert!((0.0..=100.0).contains(&next.injury));
        prop_assert!((0.0..=100.0).contains(&next.stress));
        prop_assert!((0.0..=100.0).contains(&next.morale));
        prop_assert!((0.0..=100.0).contains(&next.hunger));
        prop_assert!((0.0..=100.0).contains(&next.hydration));
    }

    #[test]
    fn rest_never_pushes_stats_out_of_range(
        state in arb_pet_state(),
        elapsed_ms in 0u64..1_000_000_000,
        duration_hours in 0.0f32..48.0,
    ) {
        let next = PetRules::apply(&state, PetInput::Rest { duration_hours }, elapsed_ms);
        prop_assert!((0.0..=100.0).contains(&next.health));
        prop_assert!((0.0..=100.0).contains(&next.fatigue));
        prop_assert!((0.0..=100.0).contains(&next.stress));
    }
}
