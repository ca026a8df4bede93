//! Session store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold session records in creation order together with the id counter.
//! - Keep storage layout details out of the ledger service.
//!
//! # Invariants
//! - Records are append-only; nothing is removed or reordered.
//! - `allocate_id` hands out 1, 2, 3, ... and never repeats a value.
//! - Lookups are linear scans in creation order.

use crate::model::session::{Session, SessionId};

/// Storage interface for ledger records.
pub trait SessionRepository {
    /// Reserves the next sequential id.
    fn allocate_id(&mut self) -> SessionId;
    /// Appends a record at the end of the creation order.
    fn append(&mut self, session: Session);
    /// Returns the first record with `id`, regardless of state.
    fn find(&self, id: SessionId) -> Option<&Session>;
    /// Returns the first record with `id` that is still active.
    fn find_active_mut(&mut self, id: SessionId) -> Option<&mut Session>;
    /// All records in creation order.
    fn sessions(&self) -> &[Session];
}

/// Vector-backed session store living for the process lifetime.
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Vec<Session>,
    next_id: SessionId,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn allocate_id(&mut self) -> SessionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn append(&mut self, session: Session) {
        self.sessions.push(session);
    }

    fn find(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    fn find_active_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|session| session.id == id && session.is_active())
    }

    fn sessions(&self) -> &[Session] {
        &self.sessions
    }
}
