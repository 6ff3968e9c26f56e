//! Shared error taxonomy.
//!
//! Split by the boundary that raises it: combat-kernel errors vs.
//! aggregate/event-store errors. Both derive `thiserror::Error` rather than
//! hand-rolling `Display`/`Error` impls, matching the rest of the workspace.

use thiserror::Error;

/// Errors raised by the combat kernel (`gunrpg-combat`).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CombatError {
    #[error("combat is not in the required phase for this operation")]
    InvalidPhase,

    #[error("invalid intent: {0}")]
    InvalidIntent(String),

    #[error("operation violates the combat phase machine")]
    PhaseViolation,

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("simulation exhausted its event budget without reaching round end")]
    SimulationExhaustion,
}

/// Errors raised by the event-sourced operator aggregate (`gunrpg-aggregate`).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AggregateError {
    #[error("command rejected: {0}")]
    InvalidCommand(String),

    #[error("aggregate invariant violation: {0}")]
    InvariantViolation(String),

    #[error("event stream integrity failure: hash chain broke at sequence {truncated_at}")]
    IntegrityFailure { truncated_at: u64 },

    #[error("concurrency conflict: expected last hash did not match")]
    ConcurrencyConflict,

    #[error("event stream is empty or corrupt from the first event onward")]
    EmptyOrCorruptStream,
}
