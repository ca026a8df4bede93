//! Study session domain model.
//!
//! # Responsibility
//! - Define the subject snapshot and session record kept by the ledger.
//! - Provide the single closure transition for a session.
//!
//! # Invariants
//! - `id` is assigned by the ledger and never reused for another session.
//! - `completed` flips from `false` to `true` exactly once and never reverts.
//! - Once completed, `duration == end_time - start_time` and is never negative.
//! - `subject` is a copy taken at creation; later edits elsewhere never reach it.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sequential session identifier, starting at 1.
pub type SessionId = u64;

/// Named topic a session is about.
///
/// Identity for aggregation is `name` string equality only. Two subjects with
/// the same name and different descriptions count as the same subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    /// Informational only; never used for matching.
    pub description: String,
}

impl Subject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One timed unit of studying a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub subject: Subject,
    /// Local wall-clock time captured at creation.
    pub start_time: DateTime<Local>,
    /// `None` while the session is active.
    pub end_time: Option<DateTime<Local>>,
    /// Zero while the session is active.
    pub duration: Duration,
    /// Empty until closure.
    pub notes: String,
    pub completed: bool,
}

impl Session {
    /// Creates an active session started at `start_time`.
    pub fn start(id: SessionId, subject: Subject, start_time: DateTime<Local>) -> Self {
        Self {
            id,
            subject,
            start_time,
            end_time: None,
            duration: Duration::ZERO,
            notes: String::new(),
            completed: false,
        }
    }

    /// Returns whether this session is still running.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Closes this session at `end_time` with the given notes.
    ///
    /// Returns `false` without touching any field when the session is
    /// already completed.
    ///
    /// An `end_time` earlier than `start_time` is clamped to `start_time`, so
    /// the recorded duration is zero rather than negative.
    pub fn close(&mut self, end_time: DateTime<Local>, notes: impl Into<String>) -> bool {
        if self.completed {
            return false;
        }

        let end_time = end_time.max(self.start_time);
        self.duration = elapsed_between(self.start_time, end_time);
        self.end_time = Some(end_time);
        self.notes = notes.into();
        self.completed = true;
        true
    }
}

/// Non-negative wall-clock span from `start` to `end`.
///
/// Returns zero when `end` precedes `start`.
pub fn elapsed_between(start: DateTime<Local>, end: DateTime<Local>) -> Duration {
    end.signed_duration_since(start)
        .to_std()
        .unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::{elapsed_between, Session, Subject};
    use chrono::{DateTime, Local, TimeZone, Utc};
    use std::time::Duration;

    fn at(hour: u32, min: u32, sec: u32) -> DateTime<Local> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, min, sec)
            .unwrap()
            .with_timezone(&Local)
    }

    #[test]
    fn start_creates_active_session_without_end() {
        let session = Session::start(1, Subject::new("Math", "algebra"), at(9, 0, 0));
        assert!(session.is_active());
        assert!(!session.completed);
        assert_eq!(session.end_time, None);
        assert_eq!(session.duration, Duration::ZERO);
        assert!(session.notes.is_empty());
    }

    #[test]
    fn close_records_end_duration_and_notes_once() {
        let mut session = Session::start(1, Subject::new("Math", ""), at(9, 0, 0));

        assert!(session.close(at(9, 45, 30), "chapter 3"));
        assert!(session.completed);
        assert_eq!(session.end_time, Some(at(9, 45, 30)));
        assert_eq!(session.duration, Duration::from_secs(45 * 60 + 30));
        assert_eq!(session.notes, "chapter 3");

        assert!(!session.close(at(10, 0, 0), "again"));
        assert_eq!(session.end_time, Some(at(9, 45, 30)));
        assert_eq!(session.notes, "chapter 3");
    }

    #[test]
    fn close_before_start_clamps_to_zero_duration() {
        let mut session = Session::start(4, Subject::new("Physics", ""), at(12, 0, 0));
        assert!(session.close(at(11, 59, 0), ""));
        assert_eq!(session.end_time, Some(at(12, 0, 0)));
        assert_eq!(session.duration, Duration::ZERO);
    }

    #[test]
    fn elapsed_between_never_negative() {
        assert_eq!(elapsed_between(at(8, 0, 0), at(7, 0, 0)), Duration::ZERO);
        assert_eq!(
            elapsed_between(at(7, 0, 0), at(8, 0, 1)),
            Duration::from_secs(3601)
        );
    }
}
