//! Domain model for department rosters.
//!
//! # Responsibility
//! - Define the canonical employee record used by registry and service code.
//!
//! # Invariants
//! - Every employee is identified by a trimmed, non-empty `EmployeeId`.
//! - Records are only constructed through validating constructors.

pub mod employee;
