//! Per-shot angular hit resolution (§4.4).
//!
//! Vertical-only angular band intersection over the target silhouette. The
//! shooter aims at a band center; aim error, recoil, and variance perturb
//! the final angle, which either lands in a band or misses outside `[0,1]`.

use gunrpg_core::constants::TuningConfig;
use gunrpg_core::enums::BodyPart;
use gunrpg_core::rng::TrackedRandom;

/// Computes the final vertical angle for a shot, given the intended band,
/// the shooter's base accuracy, effective accuracy proficiency, and current
/// recoil/weapon recoil contribution.
pub fn resolve_angle(
    intended: BodyPart,
    accuracy: f32,
    effective_proficiency: f32,
    current_recoil_y: f32,
    weapon_vertical_recoil: f32,
    rng: &mut TrackedRandom,
    tuning: &TuningConfig,
) -> f32 {
    let ap = effective_proficiency.clamp(0.0, 1.0);
    let base = intended.center();

    let base_aim_stddev = (1.0 - accuracy) * tuning.base_aim_stddev_coeff;
    let aim_stddev = base_aim_stddev * (1.0 - ap * tuning.max_aim_reduction);
    let aim_error = rng.gaussian_scaled(0.0, aim_stddev.max(0.0));

    let recoil_red = 1.0 - ap * tuning.max_recoil_control;

    let sigma = tuning.variance_sigma;
    let raw_variance = rng.uniform_range(-sigma, sigma);
    let variance = raw_variance * (1.0 - ap * tuning.max_variance_reduction);

    base + aim_error + (current_recoil_y + weapon_vertical_recoil) * recoil_red + variance
}

/// Maps a resolved angle to a hit band, or `None` for a miss.
pub fn angle_to_result(angle: f32) -> Option<BodyPart> {
    BodyPart::from_angle(angle)
}

/// Whether a miss landed close enough to the silhouette's edge to still
/// apply suppression (§4.5): within `tuning.suppression_near_miss_angle` of
/// the `[0, 1]` boundary it fell outside of. A hit is never a near miss.
pub fn is_near_miss(angle: f32, tuning: &TuningConfig) -> bool {
    if (0.0..=1.0).contains(&angle) {
        return false;
    }
    let deviation = if angle < 0.0 { -angle } else { angle - 1.0 };
    deviation <= tuning.suppression_near_miss_angle
}

/// Bullet travel time in milliseconds, rounded away from zero. Zero if
/// `bullet_velocity_mps` is non-positive.
pub fn travel_time_ms(distance_m: f32, bullet_velocity_mps: f32) -> u64 {
    if bullet_velocity_mps <= 0.0 {
        return 0;
    }
    let ms = (distance_m / bullet_velocity_mps) * 1000.0;
    ms.abs().ceil() as u64
}

/// Recoil recovery multiplier applied to the immediate post-shot partial
/// recovery and to ongoing time-based recovery.
pub fn recoil_recovery_multiplier(effective_proficiency: f32, tuning: &TuningConfig) -> f32 {
    tuning.recoil_recovery_base + tuning.recoil_recovery_ap_coeff * effective_proficiency.clamp(0.0, 1.0)
}
