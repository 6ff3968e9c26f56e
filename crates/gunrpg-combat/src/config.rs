//! Combat-level configuration.

use gunrpg_core::constants::TuningConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration accepted by [`crate::Combat::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConfig {
    /// RNG seed for determinism. Omitted at the call site means the caller
    /// supplied a nondeterministic seed (e.g. drawn from entropy) before
    /// constructing this struct — the core itself never seeds implicitly.
    pub seed: u64,
    /// When set, per-shot telemetry is emitted via `tracing` at `debug`
    /// level. Never load-bearing for control flow.
    pub verbose_shot_logs: bool,
    pub tuning: TuningConfig,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            verbose_shot_logs: false,
            tuning: TuningConfig::default(),
        }
    }
}
