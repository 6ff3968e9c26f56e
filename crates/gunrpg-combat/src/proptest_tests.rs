use gunrpg_core::constants::TuningConfig;
use gunrpg_core::enums::BodyPart;
use gunrpg_core::rng::TrackedRandom;
use proptest::prelude::*;

use crate::hit_resolution;
use crate::movement;
use crate::suppression;

proptest! {
    #[test]
    fn resolved_angle_is_always_finite(
        seed in any::<u64>(),
        accuracy in 0.0f32..=1.0,
        proficiency in 0.0f32..=1.0,
        recoil in 0.0f32..5.0,
        vertical_recoil in 0.0f32..5.0,
    ) {
        let tuning = TuningConfig::default();
        let mut rng = TrackedRandom::new(seed);
        for part in [BodyPart::LowerTorso, BodyPart::UpperTorso, BodyPart::Neck, BodyPart::Head] {
            let angle = hit_resolution::resolve_angle(
                part, accuracy, proficiency, recoil, vertical_recoil, &mut rng, &tuning,
            );
            prop_assert!(angle.is_finite());
        }
    }

    #[test]
    fn suppression_combine_stays_in_unit_range(
        current in 0.0f32..=1.0,
        applied in 0.0f32..=1.0,
    ) {
        let combined = suppression::combine(current, applied);
        prop_assert!((0.0..=1.0).contains(&combined));
    }

    #[test]
    fn slide_distance_never_goes_negative(
        distance in 0.0f32..100.0,
        toward in any::<bool>(),
    ) {
        let result = movement::apply_slide_distance(distance, toward);
        prop_assert!(result >= 0.0);
    }

    #[test]
    fn travel_time_is_never_negative_and_zero_for_bad_velocity(
        distance in 0.0f32..1000.0,
        velocity in -10.0f32..2000.0,
    ) {
        let ms = hit_resolution::travel_time_ms(distance, velocity);
        if velocity <= 0.0 {
            prop_assert_eq!(ms, 0);
        }
    }
}
