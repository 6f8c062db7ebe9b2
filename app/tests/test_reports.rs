//! FILENAME: tests/test_reports.rs
//! Integration tests for dashboard, reports and department commands.

mod common;

use app_lib::{
    add_employee, check_in, get_dashboard_stats, get_department_overview, get_report_summary,
    AppConfig, CheckInRequest,
};
use common::{RosterFixture, TestHarness};
use records::{AttendanceStatus, RecordId};
use stats_engine::TenureInsight;

// ============================================================================
// DASHBOARD
// ============================================================================

#[test]
fn test_dashboard_stats() {
    let harness = TestHarness::with_attendance();
    let stats = get_dashboard_stats(&harness.state).unwrap();
    assert_eq!(stats.total_employees, 12);
    assert_eq!(stats.department_count, 5);
    // Present + late today: Alice and Bob out of twelve.
    assert_eq!(stats.attendance_rate, Some(16.7));
    assert!(stats.average_tenure > 1.0 && stats.average_tenure < 2.0);
}

#[test]
fn test_dashboard_rate_follows_check_ins() {
    let harness = TestHarness::with_attendance();
    for id in 5..=8 {
        let req = CheckInRequest {
            employee_id: RecordId::Number(id),
            status: AttendanceStatus::Present,
            notes: None,
        };
        check_in(&harness.state, req).unwrap();
    }
    assert_eq!(get_dashboard_stats(&harness.state).unwrap().attendance_rate, Some(50.0));
}

#[test]
fn test_dashboard_empty_roster() {
    let harness = TestHarness::empty();
    let stats = get_dashboard_stats(&harness.state).unwrap();
    assert_eq!(stats.total_employees, 0);
    assert_eq!(stats.attendance_rate, None);
    assert_eq!(stats.department_count, 0);
    assert_eq!(stats.average_tenure, 0.0);
}

// ============================================================================
// REPORTS PAGE
// ============================================================================

#[test]
fn test_report_summary_distributions() {
    let harness = TestHarness::with_roster();
    let report = get_report_summary(&harness.state).unwrap();

    let roles: Vec<(&str, usize)> = report
        .role_distribution
        .iter()
        .map(|d| (d.label.as_str(), d.count))
        .collect();
    assert_eq!(roles, vec![("Admin", 2), ("User", 7), ("Guest", 3)]);

    let active = &report.status_distribution[0];
    assert_eq!((active.label.as_str(), active.count), ("active", 10));
    assert_eq!(report.active_rate.map(|r| (r * 10.0).round() / 10.0), Some(83.3));

    assert_eq!(report.top_departments[0].label, "Engineering");
    assert_eq!(report.top_departments[0].count, 5);
    assert_eq!(report.department_counts.len(), 5);
}

#[test]
fn test_report_summary_growth() {
    let harness = TestHarness::with_roster();
    let report = get_report_summary(&harness.state).unwrap();

    assert_eq!(report.monthly_hires.get("2024-03"), Some(&1));
    assert_eq!(report.monthly_hires.get("2024-02"), Some(&2));
    assert_eq!(report.cumulative_growth.values().last(), Some(&12));
    assert_eq!(report.growth.latest_month.as_deref(), Some("2024-03"));
    assert_eq!(report.growth.delta, -1);
    assert_eq!(report.growth.percent_change, Some(-50.0));
    assert_eq!(report.tenure_insight, TenureInsight::Concern);
    assert_eq!(report.tenure_message, "Monitor turnover");
}

#[test]
fn test_report_top_departments_configurable() {
    let config = AppConfig {
        top_departments: 2,
        ..AppConfig::default()
    };
    let harness = TestHarness::with_config(config);
    let report = get_report_summary(&harness.state).unwrap();
    let top: Vec<&str> = report.top_departments.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(top, vec!["Engineering", "Sales"]);
}

// ============================================================================
// DEPARTMENTS
// ============================================================================

#[test]
fn test_department_overview() {
    let harness = TestHarness::with_roster();
    let overview = get_department_overview(&harness.state).unwrap();

    assert_eq!(overview.department_count, 5);
    assert_eq!(overview.assigned_count, 12);
    assert_eq!(overview.average_department_size, Some(2.4));

    let engineering = &overview.departments[0];
    assert_eq!(engineering.name, "Engineering");
    assert_eq!(engineering.count, 5);
    assert_eq!(engineering.active_count, 5);
    assert_eq!(engineering.preview.len(), 5);
    assert_eq!(engineering.more_count, 0);

    let sales = &overview.departments[1];
    assert_eq!(sales.name, "Sales");
    assert_eq!(sales.inactive_count, 2);
}

#[test]
fn test_department_preview_limit() {
    let config = AppConfig {
        department_preview: 3,
        ..AppConfig::default()
    };
    let harness = TestHarness::with_config(config);
    add_employee(&harness.state, RosterFixture::new_employee("Nora Quinn", "Engineering")).unwrap();

    let overview = get_department_overview(&harness.state).unwrap();
    let engineering = &overview.departments[0];
    assert_eq!(engineering.count, 6);
    assert_eq!(engineering.preview.len(), 3);
    assert_eq!(engineering.more_count, 3);
    assert_eq!(engineering.preview[0].initial, "A");
}
