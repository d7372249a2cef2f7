use roster_core::{
    AddEmployeeRequest, EmployeeEdit, RegistryError, RosterService, ValidationError,
};

fn request(id: &str, name: &str, birthdate: &str, rate: &str) -> AddEmployeeRequest {
    AddEmployeeRequest::new(id, name, birthdate, rate)
}

#[test]
fn add_employee_returns_stored_record() {
    let mut service = RosterService::new("Engineering");

    let created = service
        .add_employee(&request("E1", "Ada Lovelace", "1990-01-01", "50"))
        .unwrap();
    assert_eq!(created.id(), "E1");
    assert_eq!(service.find_employee("E1").unwrap().name(), "Ada Lovelace");
}

#[test]
fn add_employee_requires_every_field() {
    let mut service = RosterService::new("Engineering");

    for (req, field) in [
        (request(" ", "Ada", "1990-01-01", "1"), "id"),
        (request("E1", "", "1990-01-01", "1"), "name"),
        (request("E1", "Ada", "", "1"), "birthdate"),
        (request("E1", "Ada", "1990-01-01", ""), "salary_rate"),
    ] {
        let err = service.add_employee(&req).unwrap_err();
        assert_eq!(
            err,
            RegistryError::Validation(ValidationError::MissingField(field))
        );
    }
    assert!(service.department().is_empty());
}

#[test]
fn service_distinguishes_error_kinds() {
    let mut service = RosterService::new("Engineering");
    service
        .add_employee(&request("E1", "Ada", "1990-01-01", "1"))
        .unwrap();

    let duplicate = service
        .add_employee(&request("E1", "Ada", "1990-01-01", "1"))
        .unwrap_err();
    let invalid = service
        .add_employee(&request("E2", "Alan", "1990-01-01", "-5"))
        .unwrap_err();
    let missing = service
        .edit_employee("E3", &EmployeeEdit::new().name("Nobody"))
        .unwrap_err();

    assert_eq!(duplicate.kind(), "duplicate_id");
    assert_eq!(invalid.kind(), "validation");
    assert_eq!(missing.kind(), "not_found");
}

#[test]
fn list_and_search_rows_number_from_one() {
    let mut service = RosterService::new("Engineering");
    service
        .add_employee(&request("E1", "Ada Lovelace", "1990-01-01", "50"))
        .unwrap();
    service
        .add_employee(&request("E2", "Grace Hopper", "1906-12-09", "45"))
        .unwrap();

    let rows = service.list_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].ordinal, 1);
    assert_eq!(rows[1].ordinal, 2);

    let hits = service.search_rows("HOPPER");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ordinal, 2);
    assert_eq!(hits[0].id, "E2");
}

#[test]
fn remove_employee_reports_whether_removed() {
    let mut service = RosterService::new("Engineering");
    service
        .add_employee(&request("E1", "Ada", "1990-01-01", "1"))
        .unwrap();

    assert!(!service.remove_employee("E2"));
    assert!(service.remove_employee("E1"));
    assert!(service.into_department().is_empty());
}
