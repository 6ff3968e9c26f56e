//! Phase machine guards (§4.2).
//!
//! `CombatPhase` itself lives in `gunrpg-core` since the aggregate boundary
//! also needs to read it from a `RoundOutcome`; this module holds the
//! guard functions `Combat` uses to enforce the transition rules.

use gunrpg_core::enums::CombatPhase;
use gunrpg_core::errors::CombatError;

pub fn require_planning(phase: CombatPhase) -> Result<(), CombatError> {
    if phase == CombatPhase::Planning {
        Ok(())
    } else {
        Err(CombatError::InvalidPhase)
    }
}
