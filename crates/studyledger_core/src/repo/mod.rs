//! Session storage abstractions.
//!
//! # Responsibility
//! - Define the storage contract the ledger service depends on.
//! - Provide the process-lifetime in-memory store.
//!
//! # Invariants
//! - Storage is append-only and preserves creation order.

pub mod session_repo;
