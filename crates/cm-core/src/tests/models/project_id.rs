use crate::ProjectId;

#[test]
fn test_project_id_wraps_value() {
    let id = ProjectId::new(99);
    assert_eq!(id.value(), 99);
}

#[test]
fn test_project_id_from_i64() {
    let id: ProjectId = 5.into();
    assert_eq!(id, ProjectId::new(5));
}

#[test]
fn test_project_id_display() {
    assert_eq!(ProjectId::new(12).to_string(), "12");
}
