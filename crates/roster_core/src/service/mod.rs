//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Keep UI/FFI/CLI layers decoupled from registry internals.

pub mod roster_service;
