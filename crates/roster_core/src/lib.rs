//! Core domain logic for the employee roster.
//! This crate is the single source of truth for roster invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::employee::{
    parse_birthdate, parse_salary_rate, Employee, EmployeeId, ValidationError,
};
pub use registry::department::{Department, EmployeeEdit, RegistryError, RegistryResult};
pub use search::substring::{RosterRow, SearchQuery};
pub use service::roster_service::{AddEmployeeRequest, RosterService, DEFAULT_DEPARTMENT_NAME};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
