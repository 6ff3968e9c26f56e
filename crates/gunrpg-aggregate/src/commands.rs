//! Commands accepted by [`crate::aggregate::OperatorAggregate::append`],
//! mirroring the state transitions in §4.8.

use gunrpg_core::ids::{CombatSessionId, InfilSessionId};

use crate::pet::PetInput;

#[derive(Debug, Clone, PartialEq)]
pub enum AggregateCommand {
    GainXp { amount: u64 },
    TreatWounds { restored: f32 },
    ChangeLoadout { weapon_name: String },
    UnlockPerk { perk_name: String },
    StartInfil { session_id: InfilSessionId },
    StartCombatSession { session_id: CombatSessionId },
    SucceedExfil,
    FailExfil,
    EndInfil { successful: bool, reason: String },
    Die,
    ApplyPetAction { input: PetInput },
}
