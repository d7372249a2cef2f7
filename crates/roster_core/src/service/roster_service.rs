//! Roster use-case service.
//!
//! # Responsibility
//! - Own the session's department registry and expose form-level use-cases.
//! - Apply the "all fields required" rule for new employees.
//! - Emit metadata-only diagnostics for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass registry validation.
//! - Log lines never contain names, birthdates or salary rates.

use crate::model::employee::{Employee, ValidationError};
use crate::registry::department::{Department, EmployeeEdit, RegistryError, RegistryResult};
use crate::search::substring::RosterRow;
use log::{debug, info, warn};

/// Default label used when the caller does not name a department.
pub const DEFAULT_DEPARTMENT_NAME: &str = "Default Department";

/// Raw form input for creating one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddEmployeeRequest {
    pub id: String,
    pub name: String,
    pub birthdate: String,
    pub salary_rate: String,
}

impl AddEmployeeRequest {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birthdate: impl Into<String>,
        salary_rate: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birthdate: birthdate.into(),
            salary_rate: salary_rate.into(),
        }
    }

    fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("birthdate", &self.birthdate),
            ("salary_rate", &self.salary_rate),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Session-scoped facade over one [`Department`].
#[derive(Debug, Clone)]
pub struct RosterService {
    department: Department,
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new(DEFAULT_DEPARTMENT_NAME)
    }
}

impl RosterService {
    /// Starts a session with an empty department named `department_name`.
    pub fn new(department_name: impl Into<String>) -> Self {
        Self::with_department(Department::new(department_name))
    }

    /// Starts a session over an existing registry.
    pub fn with_department(department: Department) -> Self {
        info!(
            "event=roster_open module=service status=ok members={}",
            department.len()
        );
        Self { department }
    }

    pub fn department(&self) -> &Department {
        &self.department
    }

    /// Consumes the service and returns its registry.
    pub fn into_department(self) -> Department {
        self.department
    }

    /// Creates an employee from form input.
    ///
    /// # Contract
    /// - Every field is required; a blank field fails with
    ///   `ValidationError::MissingField` before any parsing.
    /// - Returns the stored record.
    pub fn add_employee(&mut self, request: &AddEmployeeRequest) -> RegistryResult<Employee> {
        let result = self.add_employee_inner(request);
        log_outcome("employee_add", &result);
        result
    }

    fn add_employee_inner(&mut self, request: &AddEmployeeRequest) -> RegistryResult<Employee> {
        if let Some(field) = request.first_missing_field() {
            return Err(ValidationError::MissingField(field).into());
        }
        let employee = Employee::parse(
            &request.id,
            &request.name,
            &request.birthdate,
            &request.salary_rate,
        )?;
        self.department.add(employee.clone())?;
        Ok(employee)
    }

    /// Applies a partial update; see [`Department::edit`].
    pub fn edit_employee(&mut self, id: &str, edit: &EmployeeEdit) -> RegistryResult<Employee> {
        let result = self.department.edit(id, edit);
        log_outcome("employee_edit", &result);
        result
    }

    /// Removes one employee; absent ids are not an error.
    pub fn remove_employee(&mut self, id: &str) -> bool {
        let removed = self.department.remove(id);
        info!(
            "event=employee_remove module=service status=ok removed={} members={}",
            removed,
            self.department.len()
        );
        removed
    }

    /// Looks one employee up, reporting absence as `NotFound`.
    pub fn find_employee(&self, id: &str) -> RegistryResult<&Employee> {
        self.department.require(id)
    }

    /// Full listing as display rows.
    pub fn list_rows(&self) -> Vec<RosterRow> {
        self.department.rows()
    }

    /// Search listing as display rows.
    pub fn search_rows(&self, query: &str) -> Vec<RosterRow> {
        let rows = self.department.search(query);
        debug!(
            "event=employee_search module=service status=ok query_chars={} hits={}",
            query.chars().count(),
            rows.len()
        );
        rows
    }
}

fn log_outcome<T>(event: &str, result: &Result<T, RegistryError>) {
    match result {
        Ok(_) => info!("event={event} module=service status=ok"),
        Err(err) => warn!(
            "event={event} module=service status=error error_code={}",
            err.kind()
        ),
    }
}
