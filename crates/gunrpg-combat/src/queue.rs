//! Priority event queue.
//!
//! Ordered by `(event_time_ms, operator_id, sequence_number)` ascending.
//! Sequence numbers come from a single monotonic per-combat counter, which
//! is the tiebreaker that makes dispatch order fully deterministic across
//! runs sharing a seed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gunrpg_core::ids::OperatorId;

use crate::event::SimulationEvent;

#[derive(Debug, Clone, PartialEq)]
struct QueueEntry {
    event_time_ms: u64,
    operator_id: OperatorId,
    sequence_number: u64,
    event: SimulationEvent,
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.event_time_ms, self.operator_id, self.sequence_number).cmp(&(
            other.event_time_ms,
            other.operator_id,
            other.sequence_number,
        ))
    }
}

/// Min-heap over `(time, operator_id, sequence)`, implemented as a max-heap
/// of `Reverse` entries since `BinaryHeap` is a max-heap by default.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<QueueEntry>>,
    next_sequence: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence number from the per-combat monotonic counter.
    pub fn next_sequence(&mut self) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        seq
    }

    pub fn schedule(
        &mut self,
        event_time_ms: u64,
        operator_id: OperatorId,
        sequence_number: u64,
        event: SimulationEvent,
    ) {
        self.heap.push(Reverse(QueueEntry {
            event_time_ms,
            operator_id,
            sequence_number,
            event,
        }));
    }

    pub fn peek_time(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(e)| e.event_time_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pop the next event in `(time, operator_id, sequence)` order.
    pub fn dequeue(&mut self) -> Option<(u64, OperatorId, SimulationEvent)> {
        self.heap.pop().map(|Reverse(e)| (e.event_time_ms, e.operator_id, e.event))
    }

    /// Remove every queued event belonging to `operator_id`, except
    /// in-flight bullets (`DamageApplied`/`ShotMissed`), which must resolve
    /// at their scheduled impact time regardless of a new planning phase.
    pub fn clear_except_in_flight_bullets(&mut self, operator_id: OperatorId) {
        let retained: Vec<Reverse<QueueEntry>> = self
            .heap
            .drain()
            .filter(|Reverse(e)| {
                e.operator_id != operator_id
                    || matches!(
                        e.event,
                        SimulationEvent::DamageApplied { .. } | SimulationEvent::ShotMissed { .. }
                    )
            })
            .collect();
        self.heap = retained.into_iter().collect();
    }
}
