//! Completion events emitted when a counter reaches its target.

use crate::id::{CounterId, EventId};
use crate::Time;
use serde::{Deserialize, Serialize};

/// A counter crossed from incomplete to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Unique identifier
    pub id: EventId,

    /// Counter that completed
    pub counter_id: CounterId,

    /// When it completed
    pub completed_at: Time,
}

impl CompletionEvent {
    /// Create a new completion event.
    pub fn new(counter_id: CounterId, completed_at: Time) -> Self {
        Self {
            id: EventId::new(),
            counter_id,
            completed_at,
        }
    }
}
