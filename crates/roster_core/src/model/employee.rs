//! Employee record domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by a department registry.
//! - Parse raw form input (date and numeric text) into typed fields.
//!
//! # Invariants
//! - `id` and `name` are trimmed and never blank.
//! - `salary_rate` is finite and `>= 0`.
//! - A record can only be obtained through validated construction, including
//!   serde deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier type for employees inside one registry.
pub type EmployeeId = String;

/// Field-level validation failure for employee input.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `id` is empty after trim.
    EmptyId,
    /// `name` is empty after trim.
    EmptyName,
    /// A required form field was left blank.
    MissingField(&'static str),
    /// Birthdate text is not an ISO-8601 `YYYY-MM-DD` date.
    InvalidBirthdate { value: String },
    /// Salary rate text is not a finite number.
    InvalidSalaryRate { value: String },
    /// Salary rate is below zero.
    NegativeSalaryRate(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "employee id must not be empty"),
            Self::EmptyName => write!(f, "employee name must not be empty"),
            Self::MissingField(field) => write!(f, "field `{field}` is required"),
            Self::InvalidBirthdate { value } => {
                write!(f, "invalid birthdate `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidSalaryRate { value } => {
                write!(f, "invalid salary rate `{value}`; expected a number")
            }
            Self::NegativeSalaryRate(rate) => {
                write!(f, "salary rate must be >= 0, got {rate}")
            }
        }
    }
}

impl Error for ValidationError {}

/// One employee of a department.
///
/// Fields are private so every stored value has passed validation; use the
/// accessors for reads. Equality compares `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    birthdate: NaiveDate,
    salary_rate: f64,
}

/// Unvalidated serde shape, converted through [`Employee::new`].
#[derive(Deserialize)]
struct EmployeeRecord {
    id: String,
    name: String,
    birthdate: NaiveDate,
    salary_rate: f64,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = ValidationError;

    fn try_from(value: EmployeeRecord) -> Result<Self, Self::Error> {
        Employee::new(value.id, value.name, value.birthdate, value.salary_rate)
    }
}

impl Employee {
    /// Creates a record from already-typed field values.
    ///
    /// # Errors
    /// - `EmptyId` / `EmptyName` when the trimmed value is blank.
    /// - `InvalidSalaryRate` for non-finite rates, `NegativeSalaryRate` below zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birthdate: NaiveDate,
        salary_rate: f64,
    ) -> Result<Self, ValidationError> {
        let id = normalize_id(&id.into())?;
        let name = normalize_name(&name.into())?;
        let salary_rate = check_salary_rate(salary_rate)?;
        Ok(Self {
            id,
            name,
            birthdate,
            salary_rate,
        })
    }

    /// Creates a record from raw form text.
    ///
    /// Birthdate must be `YYYY-MM-DD`; salary rate any finite non-negative
    /// decimal. Surrounding whitespace is ignored.
    pub fn parse(
        id: &str,
        name: &str,
        birthdate: &str,
        salary_rate: &str,
    ) -> Result<Self, ValidationError> {
        let id = normalize_id(id)?;
        let name = normalize_name(name)?;
        let birthdate = parse_birthdate(birthdate)?;
        let salary_rate = parse_salary_rate(salary_rate)?;
        Ok(Self {
            id,
            name,
            birthdate,
            salary_rate,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn salary_rate(&self) -> f64 {
        self.salary_rate
    }

    // Setters take pre-validated values; only the registry edit path uses them.
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_birthdate(&mut self, birthdate: NaiveDate) {
        self.birthdate = birthdate;
    }

    pub(crate) fn set_salary_rate(&mut self, salary_rate: f64) {
        self.salary_rate = salary_rate;
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Birthday: {}, Salary Rate: {}",
            self.id, self.name, self.birthdate, self.salary_rate
        )
    }
}

/// Trims an id and rejects blank values.
pub fn normalize_id(value: &str) -> Result<EmployeeId, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(trimmed.to_string())
}

/// Trims a display name and rejects blank values.
pub fn normalize_name(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// Only the exact ten-character shape is accepted: no sign, no single-digit
/// month or day, no inner whitespace.
pub fn parse_birthdate(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    let invalid = || ValidationError::InvalidBirthdate {
        value: trimmed.to_string(),
    };
    if !is_iso_date_shape(trimmed) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Parses a salary rate and enforces the finite, non-negative constraint.
pub fn parse_salary_rate(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    let rate = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidSalaryRate {
            value: trimmed.to_string(),
        })?;
    check_salary_rate(rate)
}

fn check_salary_rate(rate: f64) -> Result<f64, ValidationError> {
    if !rate.is_finite() {
        return Err(ValidationError::InvalidSalaryRate {
            value: rate.to_string(),
        });
    }
    if rate < 0.0 {
        return Err(ValidationError::NegativeSalaryRate(rate));
    }
    // Normalizes `-0.0` so the stored value prints as `0`.
    Ok(rate + 0.0)
}
