//! Weapon configuration data.
//!
//! Weapons are pure data, not behavior: the hit-resolution kernel reads a
//! `Weapon`'s fields and bands, it never dispatches on a weapon "type".
//! This mirrors the teacher's threat-profile tables
//! (`deterrence-threat-ai::profiles`) more than its component-bundle ECS
//! pattern, since GUNRPG only ever has two fixed operators, not a dynamic
//! population of entities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::enums::BodyPart;

/// A falloff band: within `[min_m, max_m)` meters, `damage` is the base
/// damage, unless `overrides` carries a per-body-part value for the hit
/// location, in which case the override wins outright (headshot multiplier
/// included).
///
/// Bands are walked in order; the first band whose range contains the
/// shot distance wins. The last band in a well-formed table should have
/// `max_m == f32::INFINITY` so every distance resolves to something.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageBand {
    pub min_m: f32,
    pub max_m: f32,
    pub damage: f32,
    /// Per-body-part damage that replaces `damage` outright when set.
    #[serde(default)]
    pub overrides: HashMap<BodyPart, f32>,
}

impl DamageBand {
    /// A band with no per-body-part overrides.
    pub fn new(min_m: f32, max_m: f32, damage: f32) -> Self {
        Self { min_m, max_m, damage, overrides: HashMap::new() }
    }

    pub fn contains(&self, distance_m: f32) -> bool {
        distance_m >= self.min_m && distance_m < self.max_m
    }
}

/// Static weapon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub rounds_per_minute: f32,
    pub magazine_size: u32,
    pub reload_ms: u64,

    /// Ordered, non-overlapping falloff bands. Must not be empty.
    pub damage_bands: Vec<DamageBand>,
    pub headshot_multiplier: f32,

    pub bullet_velocity_mps: f32,

    pub hipfire_spread: f32,
    pub ads_spread: f32,

    pub vertical_recoil: f32,
    pub recoil_recovery_ms: u64,

    pub ads_transition_ms: u64,
    pub sprint_to_fire_ms: u64,

    /// How much suppression a single shot from this weapon applies to a
    /// near-missed target, before distance/cover scaling.
    pub suppression_factor: f32,

    /// `[0, 1]` fraction by which this weapon's flinch effect is resisted
    /// by the target's own stats; applied by the kernel, not here.
    pub flinch_resistance: f32,
}

impl Weapon {
    /// The band whose range contains `distance_m`, falling back to the last
    /// band if `distance_m` exceeds every band's range, so an out-of-table
    /// long shot still resolves rather than silently dealing zero damage.
    fn matching_band(&self, distance_m: f32) -> Option<&DamageBand> {
        self.damage_bands.iter().find(|b| b.contains(distance_m)).or_else(|| self.damage_bands.last())
    }

    /// Base damage for a shot landing at `distance_m`, before the
    /// per-body-part override and headshot multiplier are applied.
    pub fn base_damage_at(&self, distance_m: f32) -> f32 {
        self.matching_band(distance_m).map(|b| b.damage).unwrap_or(0.0)
    }

    /// Final damage for a shot at `distance_m` landing on `body_part`:
    /// the matching band's per-part override if one is set, otherwise its
    /// base damage with the headshot multiplier applied for `Head`.
    pub fn damage_at(&self, distance_m: f32, body_part: BodyPart) -> f32 {
        let Some(band) = self.matching_band(distance_m) else {
            return 0.0;
        };
        if let Some(&override_damage) = band.overrides.get(&body_part) {
            return override_damage;
        }
        match body_part {
            BodyPart::Head => band.damage * self.headshot_multiplier,
            _ => band.damage,
        }
    }
}
