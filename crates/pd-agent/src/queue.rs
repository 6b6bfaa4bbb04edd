//! `EventQueue` — the run's discrete-event queue, as seen by agents.
//!
//! The event engine that drains the queue lives outside this workspace.
//! Initialization only threads one shared handle into every agent and
//! guarantees it leaves the queue untouched, so the queue here exposes just
//! the scheduling entry point and its size.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pd_core::AgentId;

/// Shared handle captured by every agent of a run.
pub type EventQueueHandle = Arc<EventQueue>;

/// `(due second, agent)` entries in scheduling order.
#[derive(Default)]
pub struct EventQueue {
    entries: Mutex<Vec<(u64, AgentId)>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the shared handle.
    pub fn handle() -> EventQueueHandle {
        Arc::new(Self::new())
    }

    /// Schedule `agent` at `due_secs`.  Called by the run, never during
    /// agent construction.
    pub fn push(&self, due_secs: u64, agent: AgentId) {
        self.lock().push((due_secs, agent));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(u64, AgentId)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventQueue").field("len", &self.len()).finish()
    }
}
