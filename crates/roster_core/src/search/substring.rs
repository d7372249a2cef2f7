//! Case-insensitive substring search over employee id and name.
//!
//! # Invariants
//! - An empty needle matches every employee.
//! - Row ordinals are 1-based positions in the full registry listing.

use crate::model::employee::Employee;
use chrono::NaiveDate;

/// Prepared search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Creates a query; the text is lowercased once, not trimmed.
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Returns whether `employee` id or name contains the needle.
    pub fn matches(&self, employee: &Employee) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        employee.id().to_lowercase().contains(&self.needle)
            || employee.name().to_lowercase().contains(&self.needle)
    }
}

/// Flat display tuple for one listed employee.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    /// 1-based position in the full registry listing.
    pub ordinal: usize,
    pub id: String,
    pub name: String,
    pub birthdate: NaiveDate,
    pub salary_rate: f64,
}

impl RosterRow {
    pub fn from_employee(ordinal: usize, employee: &Employee) -> Self {
        Self {
            ordinal,
            id: employee.id().to_string(),
            name: employee.name().to_string(),
            birthdate: employee.birthdate(),
            salary_rate: employee.salary_rate(),
        }
    }
}

/// Filters `members` by `query`, keeping registry order and ordinals.
pub fn filter_rows<'a>(
    members: impl IntoIterator<Item = &'a Employee>,
    query: &SearchQuery,
) -> Vec<RosterRow> {
    members
        .into_iter()
        .enumerate()
        .filter(|(_, employee)| query.matches(employee))
        .map(|(index, employee)| RosterRow::from_employee(index + 1, employee))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_rows, SearchQuery};
    use crate::model::employee::Employee;

    fn employee(id: &str, name: &str) -> Employee {
        Employee::parse(id, name, "1990-01-01", "10").expect("valid employee")
    }

    #[test]
    fn query_matches_id_or_name_ignoring_case() {
        let query = SearchQuery::new("AN");
        assert!(query.matches(&employee("E1", "Dana Scully")));
        assert!(query.matches(&employee("an-7", "Fox Mulder")));
        assert!(!query.matches(&employee("E2", "Walter Skinner")));
    }

    #[test]
    fn filtered_rows_keep_registry_ordinals() {
        let members = vec![
            employee("E1", "Ada"),
            employee("E2", "Grace"),
            employee("E3", "Adele"),
        ];
        let rows = filter_rows(&members, &SearchQuery::new("ad"));
        let ordinals = rows.iter().map(|row| row.ordinal).collect::<Vec<_>>();
        assert_eq!(ordinals, vec![1, 3]);
    }

    #[test]
    fn whitespace_needle_is_not_trimmed() {
        let query = SearchQuery::new(" ");
        assert!(query.matches(&employee("E1", "Ada Lovelace")));
        assert!(!query.matches(&employee("E2", "Grace")));
    }
}
