//! Enumeration types shared between the combat kernel and the aggregate.

use serde::{Deserialize, Serialize};

/// Combat operator movement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementState {
    #[default]
    Stationary,
    Walking,
    Sprinting,
    Crouching,
    Sliding,
}

/// Aiming state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AimState {
    #[default]
    Hip,
    TransitioningToADS,
    ADS,
    TransitioningToHip,
}

/// Weapon readiness state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponState {
    #[default]
    Ready,
    Reloading,
    Jammed,
}

/// Discrete cover level. `Partial` is also used while transitioning, since
/// a transitioning operator is treated as exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverLevel {
    #[default]
    None,
    Partial,
    Full,
}

impl CoverLevel {
    /// Fraction of the silhouette visible to an observer: `None=1.0`,
    /// `Partial=0.5`, `Full=0.0`.
    pub fn visibility(self) -> f32 {
        match self {
            CoverLevel::None => 1.0,
            CoverLevel::Partial => 0.5,
            CoverLevel::Full => 0.0,
        }
    }
}

/// One of the four vertical angular bands the target silhouette is
/// partitioned into, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    LowerTorso,
    UpperTorso,
    Neck,
    Head,
}

impl BodyPart {
    /// Half-open `[lo, hi)` band boundaries, except `Head` whose upper
    /// bound is inclusive (`1.0`).
    pub const fn band(self) -> (f32, f32) {
        match self {
            BodyPart::LowerTorso => (0.0, 0.25),
            BodyPart::UpperTorso => (0.25, 0.50),
            BodyPart::Neck => (0.50, 0.75),
            BodyPart::Head => (0.75, 1.00),
        }
    }

    /// Midpoint of the band, used as the shooter's aim point for an
    /// intended body part.
    pub fn center(self) -> f32 {
        let (lo, hi) = self.band();
        (lo + hi) / 2.0
    }

    /// Maps an angle in `[0, 1]` to the band whose interval contains it.
    /// Callers are responsible for rejecting angles outside `[0, 1]` as a
    /// miss before calling this.
    pub fn from_angle(angle: f32) -> Option<BodyPart> {
        if !(0.0..=1.0).contains(&angle) {
            return None;
        }
        Some(if angle < 0.25 {
            BodyPart::LowerTorso
        } else if angle < 0.50 {
            BodyPart::UpperTorso
        } else if angle < 0.75 {
            BodyPart::Neck
        } else {
            BodyPart::Head
        })
    }
}

/// Operator lifecycle mode: deployed or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorMode {
    #[default]
    Base,
    Infil,
}

/// Combat phase machine state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatPhase {
    #[default]
    Planning,
    Executing,
    Ended,
}

/// Result of a single intercept/shot resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotResult {
    Hit(BodyPart),
    Miss,
}
