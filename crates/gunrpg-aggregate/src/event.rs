//! Immutable, append-only operator lifecycle events.
//!
//! Each event's `hash` is `SHA256(operator_id | sequence | event_type |
//! payload | previous_hash)`, formatted as lowercase hex. The chain is
//! verified event-by-event during replay rather than all at once, so a
//! single corrupted event can be localized to its sequence number.

use gunrpg_core::ids::OperatorId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Discriminator for the kind of lifecycle change an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    OperatorCreated,
    XpGained,
    WoundsTreated,
    LoadoutChanged,
    PerkUnlocked,
    InfilStarted,
    InfilEnded,
    CombatSessionStarted,
    ExfilSucceeded,
    ExfilFailed,
    OperatorDied,
    PetActionApplied,
}

impl EventKind {
    fn discriminant_str(self) -> &'static str {
        match self {
            EventKind::OperatorCreated => "OperatorCreated",
            EventKind::XpGained => "XpGained",
            EventKind::WoundsTreated => "WoundsTreated",
            EventKind::LoadoutChanged => "LoadoutChanged",
            EventKind::PerkUnlocked => "PerkUnlocked",
            EventKind::InfilStarted => "InfilStarted",
            EventKind::InfilEnded => "InfilEnded",
            EventKind::CombatSessionStarted => "CombatSessionStarted",
            EventKind::ExfilSucceeded => "ExfilSucceeded",
            EventKind::ExfilFailed => "ExfilFailed",
            EventKind::OperatorDied => "OperatorDied",
            EventKind::PetActionApplied => "PetActionApplied",
        }
    }
}

/// A single immutable, hash-chained lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorEvent {
    pub operator_id: OperatorId,
    pub sequence: u64,
    pub event_type: EventKind,
    pub payload: serde_json::Value,
    pub previous_hash: String,
    pub hash: String,
    pub timestamp: u64,
}

impl OperatorEvent {
    fn compute_hash(
        operator_id: OperatorId,
        sequence: u64,
        event_type: EventKind,
        payload: &serde_json::Value,
        previous_hash: &str,
    ) -> String {
        let mut hasher = Sha256::new();
        hasher.update(operator_id.to_be_bytes());
        hasher.update(sequence.to_be_bytes());
        hasher.update(event_type.discriminant_str().as_bytes());
        hasher.update(payload.to_string().as_bytes());
        hasher.update(previous_hash.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Builds a new event and computes its hash from the given fields.
    pub fn new(
        operator_id: OperatorId,
        sequence: u64,
        event_type: EventKind,
        payload: serde_json::Value,
        previous_hash: String,
        timestamp: u64,
    ) -> Self {
        let hash = Self::compute_hash(operator_id, sequence, event_type, &payload, &previous_hash);
        Self { operator_id, sequence, event_type, payload, previous_hash, hash, timestamp }
    }

    /// The genesis event for a freshly created operator: sequence 0, empty
    /// previous hash.
    pub fn genesis(operator_id: OperatorId, payload: serde_json::Value, timestamp: u64) -> Self {
        Self::new(operator_id, 0, EventKind::OperatorCreated, payload, String::new(), timestamp)
    }

    pub fn recompute_hash(&self) -> String {
        Self::compute_hash(self.operator_id, self.sequence, self.event_type, &self.payload, &self.previous_hash)
    }

    pub fn verify_hash(&self) -> bool {
        self.hash == self.recompute_hash()
    }

    /// Checks that `self` legally follows `prior` in the chain: contiguous
    /// sequence and a matching previous-hash link.
    pub fn verify_chain(&self, prior: &OperatorEvent) -> bool {
        self.sequence == prior.sequence + 1 && self.previous_hash == prior.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_given_same_fields() {
        let id = OperatorId::new(1).unwrap();
        let a = OperatorEvent::new(id, 0, EventKind::OperatorCreated, serde_json::json!({}), String::new(), 1000);
        let b = OperatorEvent::new(id, 0, EventKind::OperatorCreated, serde_json::json!({}), String::new(), 1000);
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn hash_changes_with_payload() {
        let id = OperatorId::new(1).unwrap();
        let a = OperatorEvent::new(id, 0, EventKind::XpGained, serde_json::json!({"amount": 10}), String::new(), 0);
        let b = OperatorEvent::new(id, 0, EventKind::XpGained, serde_json::json!({"amount": 11}), String::new(), 0);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn hash_is_lowercase_hex_of_sha256_length() {
        let id = OperatorId::new(1).unwrap();
        let e = OperatorEvent::genesis(id, serde_json::json!({}), 0);
        assert_eq!(e.hash.len(), 64);
        assert!(e.hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn chain_verification_requires_contiguous_sequence_and_matching_hash() {
        let id = OperatorId::new(1).unwrap();
        let genesis = OperatorEvent::genesis(id, serde_json::json!({}), 0);
        let next = OperatorEvent::new(
            id,
            1,
            EventKind::XpGained,
            serde_json::json!({"amount": 5}),
            genesis.hash.clone(),
            1,
        );
        assert!(next.verify_chain(&genesis));

        let bad_seq = OperatorEvent::new(
            id,
            2,
            EventKind::XpGained,
            serde_json::json!({"amount": 5}),
            genesis.hash.clone(),
            1,
        );
        assert!(!bad_seq.verify_chain(&genesis));
    }
}
