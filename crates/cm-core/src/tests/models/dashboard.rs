use crate::{Dashboard, Project};

use chrono::NaiveDate;

fn project_with_window(start: NaiveDate, end: NaiveDate, budget: f64) -> Project {
    Project {
        id: 7,
        name: "Depot Refit".to_string(),
        description: "Warehouse refit".to_string(),
        location: "Arequipa".to_string(),
        start_date: start,
        expected_end_date: end,
        budget,
        url_image: String::new(),
        owner_user_id: 3,
    }
}

#[test]
fn test_dashboard_planned_duration() {
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
    let dashboard = Dashboard::new(project_with_window(start, end, 1000.0));

    assert_eq!(dashboard.planned_duration_days(), 10);
    assert_eq!(dashboard.budget_per_day(), Some(100.0));
}

#[test]
fn test_dashboard_same_day_window_has_no_daily_budget() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let dashboard = Dashboard::new(project_with_window(day, day, 1000.0));

    assert_eq!(dashboard.planned_duration_days(), 0);
    assert_eq!(dashboard.budget_per_day(), None);
}

#[test]
fn test_dashboard_accessors_expose_the_same_project() {
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
    let project = project_with_window(start, end, 500.0);
    let dashboard = Dashboard::new(project.clone());

    assert_eq!(dashboard.project(), &project);
    assert_eq!(dashboard.into_project(), project);
}
