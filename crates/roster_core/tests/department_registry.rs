use roster_core::{Department, Employee, EmployeeEdit, RegistryError, ValidationError};

fn employee(id: &str, name: &str, birthdate: &str, rate: &str) -> Employee {
    Employee::parse(id, name, birthdate, rate).unwrap()
}

fn seeded() -> Department {
    let mut department = Department::new("Engineering");
    department
        .add(employee("E1", "Ada Lovelace", "1990-01-01", "50.0"))
        .unwrap();
    department
        .add(employee("E2", "Alan Turing", "1912-06-23", "40.0"))
        .unwrap();
    department
        .add(employee("X-AN", "Grace Hopper", "1906-12-09", "45.0"))
        .unwrap();
    department
}

fn ids(department: &Department) -> Vec<String> {
    department
        .list()
        .iter()
        .map(|member| member.id().to_string())
        .collect()
}

#[test]
fn add_then_find_returns_exact_fields() {
    let mut department = Department::new("Engineering");
    department
        .add(employee("E1", "Ada Lovelace", "1990-01-01", "50.0"))
        .unwrap();

    let found = department.find("E1").unwrap();
    assert_eq!(found.id(), "E1");
    assert_eq!(found.name(), "Ada Lovelace");
    assert_eq!(found.birthdate().to_string(), "1990-01-01");
    assert_eq!(found.salary_rate(), 50.0);
}

#[test]
fn duplicate_add_fails_and_keeps_size() {
    let mut department = seeded();

    let err = department
        .add(employee("E1", "Someone Else", "2000-01-01", "1"))
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateId("E1".to_string()));
    assert_eq!(department.len(), 3);
    assert_eq!(department.find("E1").unwrap().name(), "Ada Lovelace");
}

#[test]
fn add_appends_in_insertion_order() {
    let department = seeded();
    assert_eq!(ids(&department), vec!["E1", "E2", "X-AN"]);
}

#[test]
fn remove_absent_id_is_a_no_op() {
    let mut department = seeded();
    let before = ids(&department);

    assert!(!department.remove("E404"));
    assert_eq!(ids(&department), before);
}

#[test]
fn remove_present_id_shrinks_registry() {
    let mut department = seeded();

    assert!(department.remove("E2"));
    assert_eq!(department.len(), 2);
    assert!(department.find("E2").is_none());
    assert_eq!(
        department.require("E2").unwrap_err(),
        RegistryError::NotFound("E2".to_string())
    );
    assert_eq!(ids(&department), vec!["E1", "X-AN"]);
}

#[test]
fn edit_with_invalid_birthdate_changes_nothing() {
    let mut department = seeded();

    let edit = EmployeeEdit::new()
        .name("Augusta Ada King")
        .birthdate("1990-02-31")
        .salary_rate("99");
    let err = department.edit("E1", &edit).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::InvalidBirthdate { .. })
    ));

    let member = department.find("E1").unwrap();
    assert_eq!(member.name(), "Ada Lovelace");
    assert_eq!(member.birthdate().to_string(), "1990-01-01");
    assert_eq!(member.salary_rate(), 50.0);
}

#[test]
fn edit_with_blank_name_changes_nothing() {
    let mut department = seeded();

    let err = department
        .edit("E1", &EmployeeEdit::new().name("  ").salary_rate("10"))
        .unwrap_err();
    assert_eq!(err, RegistryError::Validation(ValidationError::EmptyName));
    assert_eq!(department.find("E1").unwrap().salary_rate(), 50.0);
}

#[test]
fn edit_applies_only_supplied_fields() {
    let mut department = seeded();

    let updated = department
        .edit("E2", &EmployeeEdit::new().birthdate("1912-06-24"))
        .unwrap();
    assert_eq!(updated.name(), "Alan Turing");
    assert_eq!(updated.birthdate().to_string(), "1912-06-24");
    assert_eq!(updated.salary_rate(), 40.0);
}

#[test]
fn edit_honours_zero_salary_rate() {
    let mut department = seeded();

    department
        .edit("E1", &EmployeeEdit::new().salary_rate("0"))
        .unwrap();
    assert_eq!(department.find("E1").unwrap().salary_rate(), 0.0);
}

#[test]
fn edit_unknown_id_is_not_found() {
    let mut department = seeded();

    let err = department
        .edit("E9", &EmployeeEdit::new().name("Nobody"))
        .unwrap_err();
    assert_eq!(err, RegistryError::NotFound("E9".to_string()));
}

#[test]
fn list_is_a_snapshot() {
    let mut department = seeded();
    let snapshot = department.list();

    department.remove("E1");
    assert_eq!(snapshot.len(), 3);
    assert_eq!(department.len(), 2);
}

#[test]
fn empty_search_returns_everything_in_order() {
    let department = seeded();

    let rows = department.search("");
    let ids = rows.iter().map(|row| row.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["E1", "E2", "X-AN"]);
    assert_eq!(rows, department.rows());
}

#[test]
fn search_is_case_insensitive_over_id_and_name() {
    let department = seeded();

    let rows = department.search("an");
    let hits = rows
        .iter()
        .map(|row| (row.ordinal, row.id.as_str()))
        .collect::<Vec<_>>();
    // "Alan" matches by name, "X-AN" by id; "Ada Lovelace" has no "an".
    assert_eq!(hits, vec![(2, "E2"), (3, "X-AN")]);

    assert_eq!(department.search("ADA").len(), 1);
    assert!(department.search("zzz").is_empty());
}

#[test]
fn engineering_session_scenario() {
    let mut department = Department::new("Engineering");
    assert!(department.is_empty());

    department
        .add(Employee::parse("E1", "Ada Lovelace", "1990-01-01", "50.0").unwrap())
        .unwrap();

    let duplicate = department
        .add(Employee::parse("E1", "Ada Again", "1991-01-01", "1").unwrap())
        .unwrap_err();
    assert!(matches!(duplicate, RegistryError::DuplicateId(_)));

    department
        .edit("E1", &EmployeeEdit::new().salary_rate("60.0"))
        .unwrap();
    let member = department.find("E1").unwrap();
    assert_eq!(member.name(), "Ada Lovelace");
    assert_eq!(member.salary_rate(), 60.0);

    let hits = department.search("ada");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "E1");
    assert_eq!(hits[0].ordinal, 1);

    assert!(department.remove("E1"));
    assert!(department.list().is_empty());
}
