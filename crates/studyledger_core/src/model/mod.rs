//! Domain model for study sessions.
//!
//! # Responsibility
//! - Define canonical data structures used by the ledger.
//!
//! # Invariants
//! - Every session is identified by a sequential `SessionId`.
//! - Sessions are never deleted; closure is the only mutation.

pub mod session;
