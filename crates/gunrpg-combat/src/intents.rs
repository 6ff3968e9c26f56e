//! Per-round intent submission.

use gunrpg_core::enums::CoverLevel;
use serde::{Deserialize, Serialize};

/// Stance change requested for the round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StanceIntent {
    #[default]
    None,
    EnterADS,
    ExitADS,
    /// Move one cover step toward `to` (§4.6). A request spanning two steps
    /// (e.g. `None` -> `Full`) only advances the first step this round;
    /// another `TakeCover` submission next round continues the chain.
    TakeCover {
        to: CoverLevel,
    },
}

/// Movement requested for the round. `toward` is `true` for closing
/// distance, `false` for opening it; geometry itself is only ever changed
/// by `Slide` (§4.7 — movement selects multipliers, not distance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MovementIntent {
    Stand,
    Walk { toward: bool },
    Sprint { toward: bool },
    Slide { toward: bool },
}

impl Default for MovementIntent {
    fn default() -> Self {
        MovementIntent::Stand
    }
}

/// Primary weapon action requested for the round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryIntent {
    #[default]
    None,
    Fire,
    Reload,
}

/// A single operator's intended actions for the upcoming round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimultaneousIntents {
    pub stance: StanceIntent,
    pub movement: MovementIntent,
    pub primary: PrimaryIntent,
    pub submitted_at_ms: u64,
}
