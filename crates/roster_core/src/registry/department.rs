//! Department registry: ordered, id-unique employee collection.
//!
//! # Responsibility
//! - Own the member sequence of one department.
//! - Provide add/remove/find/edit/list/search over that sequence.
//!
//! # Invariants
//! - No two members share an `id`.
//! - Insertion order is preserved and defines listing order.
//! - `edit` is all-or-nothing: a failed call leaves the member untouched.
//! - The registry never logs; every failure is returned to the caller.

use crate::model::employee::{
    normalize_id, normalize_name, parse_birthdate, parse_salary_rate, Employee, ValidationError,
};
use crate::search::substring::{filter_rows, RosterRow, SearchQuery};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry operation error.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Input field failed type/format/range validation.
    Validation(ValidationError),
    /// `add` with an id already present.
    DuplicateId(String),
    /// Edit/lookup with an id not present.
    NotFound(String),
}

impl RegistryError {
    /// Stable machine-readable error code.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DuplicateId(_) => "duplicate_id",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "employee id already exists: {id}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RegistryError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Partial update for one employee.
///
/// `None` means "not supplied" and leaves the field unchanged. `Some` values
/// are raw form text, validated before anything is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeEdit {
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub salary_rate: Option<String>,
}

impl EmployeeEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn birthdate(mut self, value: impl Into<String>) -> Self {
        self.birthdate = Some(value.into());
        self
    }

    pub fn salary_rate(mut self, value: impl Into<String>) -> Self {
        self.salary_rate = Some(value.into());
        self
    }

    /// Returns whether no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.birthdate.is_none() && self.salary_rate.is_none()
    }
}

/// In-memory roster of one department.
#[derive(Debug, Clone, Default)]
pub struct Department {
    name: String,
    members: Vec<Employee>,
}

impl Department {
    /// Creates an empty registry labelled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Appends `employee` unless its id is already registered.
    pub fn add(&mut self, employee: Employee) -> RegistryResult<()> {
        if self.position(employee.id()).is_some() {
            return Err(RegistryError::DuplicateId(employee.id().to_string()));
        }
        self.members.push(employee);
        Ok(())
    }

    /// Removes the member with `id`; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the member with `id`, if present.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.position(id).map(|index| &self.members[index])
    }

    /// Like [`Department::find`], but absence is a `NotFound` error.
    pub fn require(&self, id: &str) -> RegistryResult<&Employee> {
        self.find(id)
            .ok_or_else(|| RegistryError::NotFound(id.trim().to_string()))
    }

    /// Applies every supplied field of `edit` to the member with `id`.
    ///
    /// All supplied fields are validated first; on any failure nothing is
    /// written. Returns a snapshot of the updated member.
    pub fn edit(&mut self, id: &str, edit: &EmployeeEdit) -> RegistryResult<Employee> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.trim().to_string()))?;

        let name = edit.name.as_deref().map(normalize_name).transpose()?;
        let birthdate = edit.birthdate.as_deref().map(parse_birthdate).transpose()?;
        let salary_rate = edit
            .salary_rate
            .as_deref()
            .map(parse_salary_rate)
            .transpose()?;

        let member = &mut self.members[index];
        if let Some(name) = name {
            member.set_name(name);
        }
        if let Some(birthdate) = birthdate {
            member.set_birthdate(birthdate);
        }
        if let Some(salary_rate) = salary_rate {
            member.set_salary_rate(salary_rate);
        }
        Ok(member.clone())
    }

    /// Snapshot of all members in insertion order.
    pub fn list(&self) -> Vec<Employee> {
        self.members.clone()
    }

    /// Full listing as ordinal-numbered display rows.
    pub fn rows(&self) -> Vec<RosterRow> {
        filter_rows(&self.members, &SearchQuery::new(""))
    }

    /// Members whose id or name contains `query`, ignoring case.
    ///
    /// Rows keep registry order and report each member's listing ordinal.
    pub fn search(&self, query: &str) -> Vec<RosterRow> {
        filter_rows(&self.members, &SearchQuery::new(query))
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = normalize_id(id).ok()?;
        self.members.iter().position(|member| member.id() == id)
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Department name: {}, employees = {}",
            self.name,
            self.members.len()
        )
    }
}
