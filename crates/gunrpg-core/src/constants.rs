//! Tuning constants and reference defaults.
//!
//! These are the reference values from the spec's hit-resolution,
//! suppression, cover, and pet-decay sections. They are grouped into
//! `TuningConfig` (see the bottom of this module) so a caller can override
//! them without touching the combat kernel itself — weapon and tuning data
//! are configuration the core consumes, not code it owns.

use serde::{Deserialize, Serialize};

/// Default max health for a freshly-created operator.
pub const DEFAULT_MAX_HEALTH: f32 = 100.0;

// --- Hit resolution (§4.4) ---

/// Coefficient turning `(1 - accuracy)` into the base aim-error stddev.
pub const BASE_AIM_STDDEV_COEFF: f32 = 0.15;

/// Maximum fraction by which accuracy proficiency can shrink aim error.
pub const MAX_AIM_REDUCTION: f32 = 0.50;

/// Maximum fraction by which accuracy proficiency can shrink recoil's
/// contribution to the final angle.
pub const MAX_RECOIL_CONTROL: f32 = 0.60;

/// Maximum fraction by which accuracy proficiency can shrink variance.
pub const MAX_VARIANCE_REDUCTION: f32 = 0.30;

/// Half-width of the uniform variance term before proficiency reduction.
pub const VARIANCE_SIGMA: f32 = 0.05;

/// Recoil recovery multiplier floor term: `recovery = 0.5 + 1.5 * ap`.
pub const RECOIL_RECOVERY_BASE: f32 = 0.5;
pub const RECOIL_RECOVERY_AP_COEFF: f32 = 1.5;

/// The "immediate partial recovery" applied right after a shot is
/// expressed as this many milliseconds of the time-based recovery curve.
pub const RECOIL_IMMEDIATE_RECOVERY_MS: f32 = 100.0;

/// Shots it takes for a flinch penalty to fully wear off.
pub const FLINCH_DURATION_SHOTS: u32 = 3;

/// Duration, in milliseconds, of a `Slide` action.
pub const SLIDE_DURATION_MS: u64 = 400;

// --- Suppression (§4.5) ---

/// Angular deviation from the target silhouette, in band units, within
/// which a shot counts as a "near miss" that applies suppression.
pub const SUPPRESSION_NEAR_MISS_ANGLE: f32 = 0.20;

/// Suppression level above which a target is considered suppressed.
pub const SUPPRESSION_THRESHOLD: f32 = 0.35;

/// Milliseconds of no new suppression application before decay resumes.
pub const SUPPRESSION_CONTINUED_FIRE_WINDOW_MS: u64 = 1500;

/// Suppression decay per millisecond once decay resumes.
pub const SUPPRESSION_DECAY_PER_MS: f32 = 0.0004;

/// Minimum/maximum rounds in a suppressive-fire burst.
pub const SUPPRESSIVE_BURST_MIN_ROUNDS: u32 = 2;
pub const SUPPRESSIVE_BURST_MAX_ROUNDS: u32 = 6;

/// Window, in milliseconds, during which a target that left Full cover is
/// still considered "recently visible" for suppressive-fire eligibility.
pub const SUPPRESSIVE_FIRE_VISIBILITY_WINDOW_MS: u64 = 3000;

// --- Cover & awareness (§4.6) ---

/// None<->Partial cover transition duration.
pub const COVER_TRANSITION_NONE_PARTIAL_MS: u64 = 100;

/// Partial<->Full cover transition duration (midpoint of the 100-150ms
/// range quoted in the spec; `TuningConfig` can override per-direction).
pub const COVER_TRANSITION_PARTIAL_FULL_MS: u64 = 125;

/// Fraction of a transition that must elapse before it can no longer be
/// cancelled.
pub const COVER_TRANSITION_CANCEL_THRESHOLD: f32 = 0.50;

/// Accuracy multiplier range during the recognition-delay window.
pub const RECOGNITION_ACCURACY_MULT_START: f32 = 0.3;
pub const RECOGNITION_ACCURACY_MULT_END: f32 = 1.0;

/// Base recognition delay (ms) at zero accuracy proficiency and zero
/// suppression; scaled down by proficiency and up by suppression.
pub const RECOGNITION_BASE_DELAY_MS: f32 = 600.0;

// --- Intent processing timings (§4.3) ---

pub const MOVEMENT_INTERVAL_MS: u64 = 100;

// --- Pet rules (§4.9) ---

/// Floor applied to every adverse-state recovery multiplier.
pub const PET_MIN_RECOVERY_MULTIPLIER: f32 = 0.1;

/// Hunger/hydration/fatigue/stress background decay per elapsed hour.
pub const PET_HUNGER_PER_HOUR: f32 = 2.5;
pub const PET_HYDRATION_PER_HOUR: f32 = 3.0;
pub const PET_FATIGUE_PER_HOUR: f32 = 1.5;
pub const PET_STRESS_PER_HOUR: f32 = 1.0;

/// Stress level above which fatigue decay accelerates.
pub const PET_STRESS_FATIGUE_THRESHOLD: f32 = 60.0;
pub const PET_STRESS_FATIGUE_ACCEL: f32 = 1.5;

/// Injury contribution to stress accumulation, per point of injury per hour.
pub const PET_INJURY_STRESS_COEFF: f32 = 0.3;

/// Stress level above which morale decays.
pub const PET_MORALE_STRESS_THRESHOLD: f32 = 50.0;
pub const PET_MORALE_DECAY_PER_HOUR: f32 = 1.0;
pub const PET_MORALE_HEALTH_DECAY_MULT: f32 = 2.0;

/// Hunger/hydration critical thresholds beyond which health decays.
pub const PET_HUNGER_CRITICAL: f32 = 80.0;
pub const PET_HYDRATION_CRITICAL: f32 = 20.0;
pub const PET_INJURY_CRITICAL: f32 = 50.0;
pub const PET_HEALTH_DECAY_PER_HOUR: f32 = 2.0;

/// `Rest` recovery rates per hour of rest, before adverse multipliers.
pub const PET_REST_HEALTH_PER_HOUR: f32 = 5.0;
pub const PET_REST_FATIGUE_PER_HOUR: f32 = 8.0;
pub const PET_REST_STRESS_PER_HOUR: f32 = 6.0;

/// Tunable knobs grouped for override without touching kernel code.
///
/// Mirrors the teacher's plain-struct-with-`Default` configuration idiom
/// (`deterrence_sim::engine::SimConfig`) rather than a file-based loader:
/// weapon and tuning data are configuration the core only consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningConfig {
    pub base_aim_stddev_coeff: f32,
    pub max_aim_reduction: f32,
    pub max_recoil_control: f32,
    pub max_variance_reduction: f32,
    pub variance_sigma: f32,
    pub recoil_recovery_base: f32,
    pub recoil_recovery_ap_coeff: f32,
    pub suppression_near_miss_angle: f32,
    pub suppression_threshold: f32,
    pub suppression_continued_fire_window_ms: u64,
    pub suppression_decay_per_ms: f32,
    pub suppressive_burst_min_rounds: u32,
    pub suppressive_burst_max_rounds: u32,
    pub suppressive_fire_visibility_window_ms: u64,
    pub cover_transition_none_partial_ms: u64,
    pub cover_transition_partial_full_ms: u64,
    pub cover_transition_cancel_threshold: f32,
    pub recognition_base_delay_ms: f32,
    pub pet_min_recovery_multiplier: f32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            base_aim_stddev_coeff: BASE_AIM_STDDEV_COEFF,
            max_aim_reduction: MAX_AIM_REDUCTION,
            max_recoil_control: MAX_RECOIL_CONTROL,
            max_variance_reduction: MAX_VARIANCE_REDUCTION,
            variance_sigma: VARIANCE_SIGMA,
            recoil_recovery_base: RECOIL_RECOVERY_BASE,
            recoil_recovery_ap_coeff: RECOIL_RECOVERY_AP_COEFF,
            suppression_near_miss_angle: SUPPRESSION_NEAR_MISS_ANGLE,
            suppression_threshold: SUPPRESSION_THRESHOLD,
            suppression_continued_fire_window_ms: SUPPRESSION_CONTINUED_FIRE_WINDOW_MS,
            suppression_decay_per_ms: SUPPRESSION_DECAY_PER_MS,
            suppressive_burst_min_rounds: SUPPRESSIVE_BURST_MIN_ROUNDS,
            suppressive_burst_max_rounds: SUPPRESSIVE_BURST_MAX_ROUNDS,
            suppressive_fire_visibility_window_ms: SUPPRESSIVE_FIRE_VISIBILITY_WINDOW_MS,
            cover_transition_none_partial_ms: COVER_TRANSITION_NONE_PARTIAL_MS,
            cover_transition_partial_full_ms: COVER_TRANSITION_PARTIAL_FULL_MS,
            cover_transition_cancel_threshold: COVER_TRANSITION_CANCEL_THRESHOLD,
            recognition_base_delay_ms: RECOGNITION_BASE_DELAY_MS,
            pet_min_recovery_multiplier: PET_MIN_RECOVERY_MULTIPLIER,
        }
    }
}
