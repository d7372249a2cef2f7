//! Roster search and display-row projection.
//!
//! # Responsibility
//! - Match employees against a free-text needle.
//! - Project records into ordinal-numbered rows for tabular views.

pub mod substring;
