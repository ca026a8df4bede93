//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and clock calls into ledger-level APIs.
//! - Keep the interactive shell decoupled from storage details.

pub mod session_service;
