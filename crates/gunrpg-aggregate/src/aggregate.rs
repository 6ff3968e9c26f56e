//! The operator aggregate (§3, §4.8).

use gunrpg_core::enums::OperatorMode;
use gunrpg_core::errors::AggregateError;
use gunrpg_core::ids::{CombatSessionId, InfilSessionId, OperatorId};
use serde::{Deserialize, Serialize};

use crate::commands::AggregateCommand;
use crate::event::{EventKind, OperatorEvent};
use crate::pet::{PetRules, PetState};

/// Long-lived, out-of-combat operator identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorAggregate {
    pub id: OperatorId,
    pub name: String,

    pub total_xp: u64,
    pub unlocked_perks: Vec<String>,
    pub exfil_streak: u32,

    pub current_health: f32,
    pub max_health: f32,

    pub equipped_weapon_name: String,
    pub locked_loadout: String,

    pub mode: OperatorMode,
    pub infil_start_time: Option<u64>,
    pub infil_session_id: Option<InfilSessionId>,
    pub active_combat_session_id: Option<CombatSessionId>,

    pub pet: Option<PetState>,

    events: Vec<OperatorEvent>,
}

/// Result of [`OperatorAggregate::rehydrate`]: the aggregate built from the
/// valid prefix of the stream, plus the sequence number the replay was
/// truncated at, if any.
#[derive(Debug, Clone)]
pub struct RehydrateResult {
    pub aggregate: OperatorAggregate,
    pub truncated_at: Option<u64>,
}

impl OperatorAggregate {
    pub fn current_sequence(&self) -> Option<u64> {
        self.events.last().map(|e| e.sequence)
    }

    pub fn last_hash(&self) -> String {
        self.events.last().map(|e| e.hash.clone()).unwrap_or_default()
    }

    pub fn events(&self) -> &[OperatorEvent] {
        &self.events
    }

    /// Creates a fresh aggregate and its genesis `OperatorCreated` event.
    /// Fails on an empty or whitespace-only name.
    pub fn create(id: OperatorId, name: &str, now: u64) -> Result<(Self, OperatorEvent), AggregateError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AggregateError::InvariantViolation("operator name must not be empty".to_string()));
        }

        let event = OperatorEvent::genesis(id, serde_json::json!({ "name": trimmed }), now);

        let mut aggregate = Self {
            id,
            name: trimmed.to_string(),
            total_xp: 0,
            unlocked_perks: Vec::new(),
            exfil_streak: 0,
            current_health: gunrpg_core::constants::DEFAULT_MAX_HEALTH,
            max_health: gunrpg_core::constants::DEFAULT_MAX_HEALTH,
            equipped_weapon_name: String::new(),
            locked_loadout: String::new(),
            mode: OperatorMode::Base,
            infil_start_time: None,
            infil_session_id: None,
            active_combat_session_id: None,
            pet: Some(PetState::healthy_defaults(now)),
            events: Vec::new(),
        };
        aggregate.events.push(event.clone());
        Ok((aggregate, event))
    }

    /// Rehydrates an aggregate from an ordered event list. The first event
    /// failing hash or chain verification terminates replay; everything
    /// before it is applied, everything from it onward is discarded. Fails
    /// only if no valid events remain.
    pub fn rehydrate(ordered_events: &[OperatorEvent]) -> Result<RehydrateResult, AggregateError> {
        let mut iter = ordered_events.iter();
        let Some(first) = iter.next() else {
            return Err(AggregateError::EmptyOrCorruptStream);
        };

        if !first.verify_hash() || first.sequence != 0 || !first.previous_hash.is_empty() {
            return Err(AggregateError::EmptyOrCorruptStream);
        }

        let name = first
            .payload
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        let (mut aggregate, _) = Self::create(first.operator_id, &name, first.timestamp)
            .map_err(|_| AggregateError::EmptyOrCorruptStream)?;
        aggregate.events.clear();
        aggregate.events.push(first.clone());

        let mut prior = first;
        let mut truncated_at = None;

        for event in iter {
            if !event.verify_hash() || !event.verify_chain(prior) {
                truncated_at = Some(event.sequence);
                break;
            }
            if aggregate.mutate_from_event(event).is_err() {
                truncated_at = Some(event.sequence);
                break;
            }
            aggregate.events.push(event.clone());
            prior = event;
        }

        Ok(RehydrateResult { aggregate, truncated_at })
    }

    /// Applies `command`, appending the resulting event to the stream.
    pub fn append(&mut self, command: AggregateCommand, now: u64) -> Result<OperatorEvent, AggregateError> {
        let (kind, payload) = self.build_event(&command, now)?;
        let sequence = self.current_sequence().map(|s| s + 1).unwrap_or(0);
        let event = OperatorEvent::new(self.id, sequence, kind, payload, self.last_hash(), now);
        self.mutate_from_event(&event)?;
        self.events.push(event.clone());
        Ok(event)
    }

    fn build_event(
        &self,
        command: &AggregateCommand,
        now: u64,
    ) -> Result<(EventKind, serde_json::Value), AggregateError> {
        use AggregateCommand::*;
        match command {
            GainXp { amount } => Ok((EventKind::XpGained, serde_json::json!({ "amount": amount }))),
            TreatWounds { restored } => Ok((EventKind::WoundsTreated, serde_json::json!({ "restored": restored }))),
            ChangeLoadout { weapon_name } => {
                if self.mode == OperatorMode::Infil {
                    return Err(AggregateError::InvalidCommand(
                        "cannot change loadout while deployed".to_string(),
                    ));
                }
                Ok((EventKind::LoadoutChanged, serde_json::json!({ "weapon_name": weapon_name })))
            }
            UnlockPerk { perk_name } => {
                Ok((EventKind::PerkUnlocked, serde_json::json!({ "perk_name": perk_name })))
            }
            StartInfil { session_id } => {
                if self.mode == OperatorMode::Infil {
                    return Err(AggregateError::InvalidCommand("already deployed".to_string()));
                }
                if self.equipped_weapon_name.trim().is_empty() {
                    return Err(AggregateError::InvariantViolation(
                        "cannot deploy without an equipped loadout".to_string(),
                    ));
                }
                Ok((EventKind::InfilStarted, serde_json::json!({ "session_id": session_id.0 })))
            }
            StartCombatSession { session_id } => {
                if self.mode != OperatorMode::Infil {
                    return Err(AggregateError::InvalidCommand("not deployed".to_string()));
                }
                Ok((EventKind::CombatSessionStarted, serde_json::json!({ "session_id": session_id.0 })))
            }
            SucceedExfil => {
                if self.mode != OperatorMode::Infil {
                    return Err(AggregateError::InvalidCommand("not deployed".to_string()));
                }
                Ok((EventKind::ExfilSucceeded, serde_json::json!({})))
            }
            FailExfil => {
                if self.mode != OperatorMode::Infil {
                    return Err(AggregateError::InvalidCommand("not deployed".to_string()));
                }
                Ok((EventKind::ExfilFailed, serde_json::json!({})))
            }
            EndInfil { successful, reason } => {
                if self.mode != OperatorMode::Infil {
                    return Err(AggregateError::InvalidCommand("not deployed".to_string()));
                }
                Ok((EventKind::InfilEnded, serde_json::json!({ "successful": successful, "reason": reason })))
            }
            Die => Ok((EventKind::OperatorDied, serde_json::json!({}))),
            ApplyPetAction { input } => {
                if self.mode != OperatorMode::Base {
                    return Err(AggregateError::InvalidCommand(
                        "pet actions are only valid outside deployment".to_string(),
                    ));
                }
                let current = self.pet.unwrap_or_else(|| PetState::healthy_defaults(now));
                let next = PetRules::apply(&current, *input, now);
                Ok((EventKind::PetActionApplied, serde_json::to_value(next).expect("PetState serializes")))
            }
        }
    }

    /// Mutates aggregate state from an already-constructed event. Shared by
    /// `append` (building a fresh event from a command) and `rehydrate`
    /// (replaying a persisted event).
    fn mutate_from_event(&mut self, event: &OperatorEvent) -> Result<(), AggregateError> {
        let bad_payload = || AggregateError::InvariantViolation("malformed event payload".to_string());

        match event.event_type {
            EventKind::OperatorCreated => {}
            EventKind::XpGained => {
                let amount = event.payload.get("amount").and_then(|v| v.as_u64()).ok_or_else(bad_payload)?;
                self.total_xp += amount;
            }
            EventKind::WoundsTreated => {
                let restored = event.payload.get("restored").and_then(|v| v.as_f64()).ok_or_else(bad_payload)? as f32;
                self.current_health = (self.current_health + restored).min(self.max_health);
            }
            EventKind::LoadoutChanged => {
                let weapon_name =
                    event.payload.get("weapon_name").and_then(|v| v.as_str()).ok_or_else(bad_payload)?;
                self.equipped_weapon_name = weapon_name.to_string();
            }
            EventKind::PerkUnlocked => {
                let perk_name = event.payload.get("perk_name").and_then(|v| v.as_str()).ok_or_else(bad_payload)?;
                self.unlocked_perks.push(perk_name.to_string());
            }
            EventKind::InfilStarted => {
                let session_id =
                    event.payload.get("session_id").and_then(|v| v.as_u64()).ok_or_else(bad_payload)?;
                self.mode = OperatorMode::Infil;
                self.infil_start_time = Some(event.timestamp);
                self.infil_session_id = Some(InfilSessionId(session_id));
                self.locked_loadout = self.equipped_weapon_name.clone();
            }
            EventKind::CombatSessionStarted => {
                let session_id =
                    event.payload.get("session_id").and_then(|v| v.as_u64()).ok_or_else(bad_payload)?;
                self.active_combat_session_id = Some(CombatSessionId(session_id));
            }
            EventKind::ExfilSucceeded => {
                self.active_combat_session_id = None;
            }
            EventKind::ExfilFailed => {
                self.exfil_streak = 0;
            }
            EventKind::InfilEnded => {
                let successful = event.payload.get("successful").and_then(|v| v.as_bool()).ok_or_else(bad_payload)?;
                self.mode = OperatorMode::Base;
                self.infil_start_time = None;
                self.infil_session_id = None;
                self.active_combat_session_id = None;
                self.locked_loadout = String::new();
                if successful {
                    self.exfil_streak += 1;
                } else {
                    self.exfil_streak = 0;
                    self.equipped_weapon_name = String::new();
                }
            }
            EventKind::OperatorDied => {
                self.current_health = self.max_health;
                self.exfil_streak = 0;
                self.mode = OperatorMode::Base;
                self.infil_start_time = None;
                self.infil_session_id = None;
                self.active_combat_session_id = None;
                self.locked_loadout = String::new();
            }
            EventKind::PetActionApplied => {
                let next: PetState = serde_json::from_value(event.payload.clone()).map_err(|_| bad_payload())?;
                self.pet = Some(next);
            }
        }
        Ok(())
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0.0
    }
}
