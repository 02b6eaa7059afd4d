use crate::Project;

use chrono::NaiveDate;

fn sample_project() -> Project {
    Project {
        id: 1,
        name: "Riverside Tower".to_string(),
        description: "24-floor residential tower".to_string(),
        location: "Lima".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        expected_end_date: NaiveDate::from_ymd_opt(2027, 6, 30).unwrap(),
        budget: 2_500_000.0,
        url_image: "https://img.example.com/riverside.png".to_string(),
        owner_user_id: 42,
    }
}

#[test]
fn test_has_valid_schedule_ordered_dates() {
    let project = sample_project();
    assert!(project.has_valid_schedule());
}

#[test]
fn test_has_valid_schedule_same_day() {
    let mut project = sample_project();
    project.expected_end_date = project.start_date;
    assert!(project.has_valid_schedule());
}

#[test]
fn test_has_valid_schedule_end_before_start() {
    let mut project = sample_project();
    project.expected_end_date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    assert!(!project.has_valid_schedule());
}
