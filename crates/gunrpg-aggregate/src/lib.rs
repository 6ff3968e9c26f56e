//! Event-sourced, hash-chained operator aggregate.
//!
//! An `OperatorAggregate` is a long-lived, out-of-combat identity:
//! progression, health, equipment, lifecycle mode, and an optional pet.
//! It is reconstructed by replaying an ordered, SHA-256 hash-chained event
//! stream; the first event that fails hash or sequence verification
//! truncates the replay so the aggregate rolls back to the last
//! known-good state rather than failing outright.

pub mod aggregate;
pub mod commands;
pub mod event;
pub mod pet;
pub mod store;


#[cfg(test)]
mod proptest_tests;

pub use aggregate::OperatorAggregate;
pub use commands::AggregateCommand;
pub use event::{EventKind, OperatorEvent};
pub use pet::{PetInput, PetRules, PetState};
pub use store::EventStore;
