//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose roster use-cases to Dart via FRB over one explicit session object.
//! - Translate raw form strings into core requests and typed errors into
//!   response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A session owns exactly one department registry; nothing is process-global
//!   except logging.
//! - Blank edit fields mean "leave unchanged".

use log::error;
use roster_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AddEmployeeRequest, EmployeeEdit, RegistryError, RosterRow, RosterService,
};
use std::sync::{Mutex, MutexGuard};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One table row for the roster view.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRowItem {
    /// 1-based position in the full listing.
    pub ordinal: u64,
    pub id: String,
    pub name: String,
    /// ISO-8601 `YYYY-MM-DD`.
    pub birthdate: String,
    pub salary_rate: f64,
}

/// Listing envelope for list and search calls.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterListResponse {
    pub items: Vec<RosterRowItem>,
    /// Human-readable summary for status bars.
    pub message: String,
}

/// Result envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterActionResponse {
    pub ok: bool,
    /// `validation|duplicate_id|not_found|internal` on failure.
    pub error_kind: Option<String>,
    pub message: String,
}

impl RosterActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            error_kind: None,
            message: message.into(),
        }
    }

    fn failure(kind: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_kind: Some(kind.to_string()),
            message: message.into(),
        }
    }

    fn from_registry_error(op: &str, err: &RegistryError) -> Self {
        Self::failure(err.kind(), format!("{op} failed: {err}"))
    }
}

/// Session handle owning one department registry.
///
/// Calls may arrive on any thread; the mutex serializes every operation.
#[flutter_rust_bridge::frb(opaque)]
pub struct RosterSession {
    service: Mutex<RosterService>,
}

impl RosterSession {
    /// Starts a session with an empty department.
    ///
    /// A blank name falls back to the core default department label.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new(department_name: String) -> Self {
        let trimmed = department_name.trim();
        let service = if trimmed.is_empty() {
            RosterService::default()
        } else {
            RosterService::new(trimmed)
        };
        Self {
            service: Mutex::new(service),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn department_name(&self) -> String {
        match self.lock() {
            Ok(service) => service.department().name().to_string(),
            Err(_) => String::new(),
        }
    }

    /// Adds one employee from form fields; every field is required.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_employee(
        &self,
        id: String,
        name: String,
        birthdate: String,
        salary_rate: String,
    ) -> RosterActionResponse {
        let request = AddEmployeeRequest::new(id, name, birthdate, salary_rate);
        self.with_service("add_employee", |service| {
            match service.add_employee(&request) {
                Ok(created) => {
                    RosterActionResponse::success(format!("Employee {} added.", created.id()))
                }
                Err(err) => RosterActionResponse::from_registry_error("add_employee", &err),
            }
        })
    }

    /// Edits one employee; blank fields are left unchanged.
    #[flutter_rust_bridge::frb(sync)]
    pub fn edit_employee(
        &self,
        id: String,
        name: String,
        birthdate: String,
        salary_rate: String,
    ) -> RosterActionResponse {
        let edit = EmployeeEdit {
            name: supplied(name),
            birthdate: supplied(birthdate),
            salary_rate: supplied(salary_rate),
        };
        self.with_service("edit_employee", |service| {
            match service.edit_employee(&id, &edit) {
                Ok(updated) => {
                    RosterActionResponse::success(format!("Employee {} updated.", updated.id()))
                }
                Err(err) => RosterActionResponse::from_registry_error("edit_employee", &err),
            }
        })
    }

    /// Removes one employee. Absent ids succeed with a "no change" message.
    #[flutter_rust_bridge::frb(sync)]
    pub fn remove_employee(&self, id: String) -> RosterActionResponse {
        self.with_service("remove_employee", |service| {
            if service.remove_employee(&id) {
                RosterActionResponse::success(format!("Employee {} removed.", id.trim()))
            } else {
                RosterActionResponse::success("No employee removed.")
            }
        })
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn list_employees(&self) -> RosterListResponse {
        match self.lock() {
            Ok(service) => to_list_response(service.list_rows()),
            Err(message) => RosterListResponse {
                items: Vec::new(),
                message,
            },
        }
    }

    /// Case-insensitive search over id and name; empty text lists all.
    #[flutter_rust_bridge::frb(sync)]
    pub fn search_employees(&self, query: String) -> RosterListResponse {
        match self.lock() {
            Ok(service) => to_list_response(service.search_rows(&query)),
            Err(message) => RosterListResponse {
                items: Vec::new(),
                message,
            },
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RosterService>, String> {
        self.service.lock().map_err(|_| {
            error!("event=session_lock module=ffi status=error error_code=lock_poisoned");
            "roster session is unavailable".to_string()
        })
    }

    fn with_service(
        &self,
        op: &str,
        f: impl FnOnce(&mut RosterService) -> RosterActionResponse,
    ) -> RosterActionResponse {
        match self.lock() {
            Ok(mut service) => f(&mut service),
            Err(message) => {
                RosterActionResponse::failure("internal", format!("{op} failed: {message}"))
            }
        }
    }
}

fn supplied(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn to_list_response(rows: Vec<RosterRow>) -> RosterListResponse {
    let items = rows.into_iter().map(to_row_item).collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No employees.".to_string()
    } else {
        format!("{} employee(s).", items.len())
    };
    RosterListResponse { items, message }
}

fn to_row_item(row: RosterRow) -> RosterRowItem {
    RosterRowItem {
        ordinal: row.ordinal as u64,
        id: row.id,
        name: row.name,
        birthdate: row.birthdate.format("%Y-%m-%d").to_string(),
        salary_rate: row.salary_rate,
    }
}
