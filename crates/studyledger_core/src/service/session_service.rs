//! Session ledger use-case service.
//!
//! # Responsibility
//! - Start and close study sessions against an injected clock.
//! - Answer active/completed/all queries and study-time aggregations.
//!
//! # Invariants
//! - Query results are copies in creation order; callers cannot reach ledger state.
//! - A failed `end_session` leaves every record unchanged.
//! - Only completed sessions contribute to study-time totals.
//! - Log events carry ids and counts only, never notes or descriptions.

use crate::clock::{Clock, SystemClock};
use crate::model::session::{elapsed_between, Session, SessionId, Subject};
use crate::repo::session_repo::{InMemorySessionRepository, SessionRepository};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No session with this id exists.
    SessionNotFound(SessionId),
    /// No active session with this id exists; it is either absent or
    /// already completed.
    NoActiveSession(SessionId),
}

impl LedgerError {
    /// Returns whether this error means the requested session was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SessionNotFound(_) | Self::NoActiveSession(_))
    }

    /// Session id the failed operation was asked about.
    pub fn session_id(&self) -> SessionId {
        match self {
            Self::SessionNotFound(id) | Self::NoActiveSession(id) => *id,
        }
    }
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionNotFound(id) => write!(f, "session with ID {id} not found"),
            Self::NoActiveSession(id) => {
                write!(f, "session with ID {id} not found or already completed")
            }
        }
    }
}

impl Error for LedgerError {}

/// Completed study time accumulated for one subject name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectTotal {
    pub subject_name: String,
    pub total: Duration,
    pub completed_sessions: usize,
}

/// Point-in-time summary of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyStats {
    pub total_study_time: Duration,
    pub active_sessions: usize,
    pub completed_sessions: usize,
    /// Subjects with non-zero completed time, in order of first appearance.
    pub by_subject: Vec<SubjectTotal>,
}

/// In-memory ledger of study sessions.
///
/// Owned by the application for the lifetime of one interactive run.
pub struct SessionLedger<R: SessionRepository = InMemorySessionRepository, C: Clock = SystemClock>
{
    repo: R,
    clock: C,
}

impl SessionLedger {
    /// Creates an empty ledger on the host clock.
    pub fn new() -> Self {
        Self::with_parts(InMemorySessionRepository::new(), SystemClock)
    }
}

impl Default for SessionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionLedger<InMemorySessionRepository, C> {
    /// Creates an empty in-memory ledger reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self::with_parts(InMemorySessionRepository::new(), clock)
    }
}

impl<R: SessionRepository, C: Clock> SessionLedger<R, C> {
    /// Creates a ledger over the provided store and clock.
    pub fn with_parts(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Starts a new active session for `subject`.
    ///
    /// # Contract
    /// - Never fails; the subject name is not validated.
    /// - Returns a copy of the stored record.
    pub fn start_session(&mut self, subject: Subject) -> Session {
        let id = self.repo.allocate_id();
        let session = Session::start(id, subject, self.clock.now());
        self.repo.append(session.clone());

        info!("event=session_start module=ledger status=ok id={id}");
        session
    }

    /// Closes the active session `id` with `notes`.
    ///
    /// # Errors
    /// - `LedgerError::NoActiveSession` when `id` is unknown or already completed.
    pub fn end_session(&mut self, id: SessionId, notes: impl Into<String>) -> LedgerResult<()> {
        let now = self.clock.now();
        let Some(session) = self.repo.find_active_mut(id) else {
            warn!("event=session_end module=ledger status=not_found id={id}");
            return Err(LedgerError::NoActiveSession(id));
        };

        if now < session.start_time {
            warn!("event=clock_regression module=ledger id={id} action=clamp_to_start");
        }
        session.close(now, notes);

        info!(
            "event=session_end module=ledger status=ok id={id} duration_secs={}",
            session.duration.as_secs()
        );
        Ok(())
    }

    /// Active sessions in creation order.
    pub fn get_active_sessions(&self) -> Vec<Session> {
        self.sessions_where(Session::is_active)
    }

    /// Completed sessions in creation order.
    pub fn get_completed_sessions(&self) -> Vec<Session> {
        self.sessions_where(|session| session.completed)
    }

    /// Every session in creation order, as an independent copy.
    pub fn get_all_sessions(&self) -> Vec<Session> {
        self.repo.sessions().to_vec()
    }

    /// Looks up one session regardless of state.
    ///
    /// # Errors
    /// - `LedgerError::SessionNotFound` when no session has `id`.
    pub fn get_session_by_id(&self, id: SessionId) -> LedgerResult<Session> {
        self.repo
            .find(id)
            .cloned()
            .ok_or(LedgerError::SessionNotFound(id))
    }

    /// Sum of durations over completed sessions.
    pub fn get_total_study_time(&self) -> Duration {
        self.completed()
            .map(|session| session.duration)
            .sum()
    }

    /// Sum of durations over completed sessions whose subject name equals
    /// `subject_name` exactly.
    pub fn get_subject_study_time(&self, subject_name: &str) -> Duration {
        self.completed()
            .filter(|session| session.subject.name == subject_name)
            .map(|session| session.duration)
            .sum()
    }

    /// Time spent so far in `session`.
    ///
    /// Active sessions report time since start on this ledger's clock;
    /// completed sessions report their recorded duration.
    pub fn elapsed(&self, session: &Session) -> Duration {
        if session.completed {
            session.duration
        } else {
            elapsed_between(session.start_time, self.clock.now())
        }
    }

    /// Completed time per subject name, ordered by first appearance.
    ///
    /// Subjects whose completed time is zero are omitted.
    pub fn subject_breakdown(&self) -> Vec<SubjectTotal> {
        let mut totals: Vec<SubjectTotal> = Vec::new();
        for session in self.repo.sessions() {
            let name = session.subject.name.as_str();
            let index = match totals.iter().position(|total| total.subject_name == name) {
                Some(index) => index,
                None => {
                    totals.push(SubjectTotal {
                        subject_name: name.to_string(),
                        total: Duration::ZERO,
                        completed_sessions: 0,
                    });
                    totals.len() - 1
                }
            };

            if session.completed {
                totals[index].total += session.duration;
                totals[index].completed_sessions += 1;
            }
        }

        totals.retain(|total| !total.total.is_zero());
        totals
    }

    /// Snapshot of totals and counts.
    pub fn statistics(&self) -> StudyStats {
        let completed_sessions = self.completed().count();
        StudyStats {
            total_study_time: self.get_total_study_time(),
            active_sessions: self.repo.sessions().len() - completed_sessions,
            completed_sessions,
            by_subject: self.subject_breakdown(),
        }
    }

    /// Number of sessions ever started.
    pub fn len(&self) -> usize {
        self.repo.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.sessions().is_empty()
    }

    fn completed(&self) -> impl Iterator<Item = &Session> {
        self.repo.sessions().iter().filter(|session| session.completed)
    }

    fn sessions_where(&self, keep: impl Fn(&Session) -> bool) -> Vec<Session> {
        self.repo
            .sessions()
            .iter()
            .filter(|&session| keep(session))
            .cloned()
            .collect()
    }
}
