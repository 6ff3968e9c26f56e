//! Opaque identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, non-empty 128-bit operator identifier.
///
/// Equality is by value. `OperatorId::nil()` is the single "empty" value,
/// rejected by every constructor that enforces the non-empty invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperatorId(u128);

impl OperatorId {
    /// Construct from a raw 128-bit value. Does not itself enforce
    /// non-emptiness; use [`OperatorId::new`] for that.
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    /// Construct a non-empty operator id, rejecting the nil value.
    pub fn new(value: u128) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The reserved empty identifier.
    pub const fn nil() -> Self {
        Self(0)
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Big-endian byte representation, used when feeding the hash chain.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Identifies a single infil deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfilSessionId(pub u64);

/// Identifies a single combat session within an infil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatSessionId(pub u64);
