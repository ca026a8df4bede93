//! Core domain logic for the study session ledger.
//! This crate is the single source of truth for session invariants.

pub mod clock;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_duration, format_wall_time};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::session::{Session, SessionId, Subject};
pub use repo::session_repo::{InMemorySessionRepository, SessionRepository};
pub use service::session_service::{
    LedgerError, LedgerResult, SessionLedger, StudyStats, SubjectTotal,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
