//! Movement model (§4.7).
//!
//! Movement never changes `distance_to_opponent` implicitly; only explicit
//! actions (`Slide`) touch geometry. The movement state otherwise selects
//! accuracy, sway, ADS-time, and suppression multipliers from a fixed
//! table, mirroring the teacher's `deterrence-threat-ai::profiles`
//! fixed-table idiom rather than a per-state trait object.

use gunrpg_core::enums::MovementState;

/// `(accuracy_mult, sway_mult, ads_time_mult, suppression_mult)` for the
/// given movement state. Multipliers are applied to the shooter's own
/// accuracy/ADS timing, and to the suppression the shooter's fire applies
/// to its target.
pub fn multipliers(state: MovementState) -> (f32, f32, f32, f32) {
    match state {
        MovementState::Stationary => (1.0, 1.0, 1.0, 1.0),
        MovementState::Crouching => (1.1, 0.8, 0.9, 1.1),
        MovementState::Walking => (0.9, 1.2, 1.1, 0.9),
        MovementState::Sprinting => (0.5, 2.0, 1.5, 0.6),
        MovementState::Sliding => (0.6, 1.8, 1.4, 0.7),
    }
}

/// Stamina consumed by a single `Slide` action.
pub const SLIDE_STAMINA_COST: f32 = 15.0;

/// Distance delta, in meters, applied atomically by a single `Slide`.
pub const SLIDE_DISTANCE_DELTA_M: f32 = 3.0;

/// Applies a slide's distance delta toward (`true`) or away (`false`) from
/// the opponent, clamped so distance never goes negative.
pub fn apply_slide_distance(current_distance_m: f32, toward: bool) -> f32 {
    let delta = if toward { -SLIDE_DISTANCE_DELTA_M } else { SLIDE_DISTANCE_DELTA_M };
    (current_distance_m + delta).max(0.0)
}
