//! Event storage contract consumed by the core, implemented by a
//! collaborator (persistence backend is out of scope here).

use gunrpg_core::errors::AggregateError;
use gunrpg_core::ids::OperatorId;

use crate::event::OperatorEvent;

/// Append must be externally serialized per `operator_id`: two concurrent
/// appenders observing the same `expected_last_hash` are reconciled by the
/// store, which rejects the second on sequence conflict (§5).
pub trait EventStore {
    fn load(&self, operator_id: OperatorId) -> Result<Vec<OperatorEvent>, AggregateError>;

    fn append(
        &mut self,
        operator_id: OperatorId,
        event: OperatorEvent,
        expected_last_hash: Option<String>,
    ) -> Result<(), AggregateError>;
}
