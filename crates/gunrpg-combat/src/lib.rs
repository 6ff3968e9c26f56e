//! Deterministic discrete-event combat simulator.
//!
//! Runs a single duel between two operators: a priority-ordered event queue,
//! a planning/execution phase machine, and per-shot angular hit resolution
//! influenced by proficiency, recoil, flinch, suppression, movement, cover,
//! and awareness. A seed drives all randomness so identical intents produce
//! byte-identical traces.

pub mod combat;
pub mod config;
pub mod cover;
pub mod event;
pub mod hit_resolution;
pub mod intents;
pub mod movement;
pub mod operator;
pub mod phase;
pub mod queue;
pub mod suppression;
pub mod time;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptest_tests;

pub use combat::{Combat, RoundOutcome};
pub use config::CombatConfig;
pub use intents::SimultaneousIntents;
pub use operator::CombatOperator;
