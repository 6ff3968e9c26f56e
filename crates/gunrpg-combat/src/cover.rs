//! Cover transitions and target-recognition delay (§4.6).

use gunrpg_core::constants::TuningConfig;
use gunrpg_core::enums::CoverLevel;

/// Duration, in milliseconds, of a single-step transition between adjacent
/// cover levels.
pub fn transition_duration_ms(from: CoverLevel, to: CoverLevel, tuning: &TuningConfig) -> u64 {
    match (from, to) {
        (CoverLevel::None, CoverLevel::Partial) | (CoverLevel::Partial, CoverLevel::None) => {
            tuning.cover_transition_none_partial_ms
        }
        (CoverLevel::Partial, CoverLevel::Full) | (CoverLevel::Full, CoverLevel::Partial) => {
            tuning.cover_transition_partial_full_ms
        }
        // Multi-step transitions (None<->Full) chain through Partial; the
        // caller is responsible for scheduling the intermediate step.
        (CoverLevel::None, CoverLevel::Full) | (CoverLevel::Full, CoverLevel::None) => {
            tuning.cover_transition_none_partial_ms + tuning.cover_transition_partial_full_ms
        }
        _ => 0,
    }
}

/// Whether a transition that started at `start_ms` and ends at `end_ms` can
/// still be cancelled at `now_ms` (less than 50% elapsed).
pub fn can_cancel(start_ms: u64, end_ms: u64, now_ms: u64, tuning: &TuningConfig) -> bool {
    if end_ms <= start_ms {
        return false;
    }
    let elapsed = now_ms.saturating_sub(start_ms) as f32;
    let total = (end_ms - start_ms) as f32;
    elapsed / total < tuning.cover_transition_cancel_threshold
}

/// Recognition delay, in milliseconds, before an observer notices a target
/// that just exited Full cover. Inversely proportional to the observer's
/// accuracy proficiency, scaled up by their suppression level.
pub fn recognition_delay_ms(
    observer_accuracy_proficiency: f32,
    observer_suppression_level: f32,
    tuning: &TuningConfig,
) -> u64 {
    let proficiency_factor = 1.0 - observer_accuracy_proficiency.clamp(0.0, 1.0);
    let suppression_scale = 1.0 + observer_suppression_level.clamp(0.0, 1.0);
    (tuning.recognition_base_delay_ms * proficiency_factor.max(0.1) * suppression_scale) as u64
}

/// Accuracy multiplier during the recognition-delay window: `0.3 -> 1.0`
/// linearly interpolated by `progress ∈ [0, 1]`.
pub fn recognition_accuracy_multiplier(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    0.3 + 0.7 * p
}

/// The single adjacent cover level to move toward on the way from `current`
/// to `desired`. A two-step request (`None` <-> `Full`) resolves to the
/// `Partial` midpoint; the caller schedules the next step on a later
/// request once that one completes. `None` if already at `desired`.
pub fn cover_step_toward(current: CoverLevel, desired: CoverLevel) -> Option<CoverLevel> {
    use CoverLevel::{Full, None as NoCover, Partial};
    match (current, desired) {
        (NoCover, NoCover) | (Partial, Partial) | (Full, Full) => None,
        (NoCover, _) => Some(Partial),
        (Full, _) => Some(Partial),
        (Partial, target) => Some(target),
    }
}
