//! Flutter-facing bridge crate for the roster core.

pub mod api;
