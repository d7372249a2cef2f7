//! Department registry and its error taxonomy.
//!
//! # Responsibility
//! - Keep the id-unique, insertion-ordered member sequence of one department.
//! - Report validation, duplicate-id and not-found failures as typed errors.
//!
//! # Invariants
//! - Registry operations are synchronous and total.
//! - Callers that share a registry across threads must wrap it in a lock.

pub mod department;
