//! FILENAME: core/stats-engine/src/reports.rs
//! PURPOSE: Dashboard tiles and the reports page summary.
//! CONTEXT: Thin composition over `aggregate`, `attendance` and `tenure`.
//! Callers pass `today`/`as_of` explicitly so every result is reproducible.

use chrono::{DateTime, NaiveDate, Utc};
use records::{AttendanceRecord, Employee, EmployeeStatus, Role};
use serde::Serialize;

use crate::aggregate::{
    average_tenure, count_by_field, cumulative_growth, month_over_month_growth, monthly_counts,
    share_percent, CategoryCount, GrowthChange, MonthlySeries,
};
use crate::attendance::attendance_rate;
use crate::tenure::{format_tenure, round_to, TenureInsight};

const CREATED_AT: &str = "createdAt";
const DEPARTMENT: &str = "department";

/// One slice of a distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub label: String,
    pub count: usize,
    /// Share of the whole roster, `0.0` for an empty roster.
    pub percent: f64,
}

/// Admin, User, Guest in that order, zero counts included.
pub fn role_distribution(employees: &[Employee]) -> Vec<Distribution> {
    let counts = count_by_field(employees, "role");
    Role::ALL
        .iter()
        .map(|role| {
            let count = counts.get(role.as_str()).unwrap_or(0);
            Distribution {
                label: role.as_str().to_string(),
                count,
                percent: share_percent(count, employees.len()),
            }
        })
        .collect()
}

/// Active then inactive. Employees without a status appear in neither.
pub fn status_distribution(employees: &[Employee]) -> Vec<Distribution> {
    let counts = count_by_field(employees, "status");
    EmployeeStatus::ALL
        .iter()
        .map(|status| {
            let count = counts.get(status.as_str()).unwrap_or(0);
            Distribution {
                label: status.as_str().to_string(),
                count,
                percent: share_percent(count, employees.len()),
            }
        })
        .collect()
}

// ============================================================================
// DASHBOARD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    /// Attended share of the roster for `today`; `None` for an empty roster.
    pub attendance_rate: Option<f64>,
    pub department_count: usize,
    /// Years, one decimal.
    pub average_tenure: f64,
}

pub fn dashboard_stats(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    today: NaiveDate,
    as_of: DateTime<Utc>,
) -> DashboardStats {
    DashboardStats {
        total_employees: employees.len(),
        attendance_rate: attendance_rate(attendance, today, employees).map(|r| round_to(r, 1)),
        department_count: count_by_field(employees, DEPARTMENT).len(),
        average_tenure: round_to(average_tenure(employees, CREATED_AT, as_of), 1),
    }
}

// ============================================================================
// REPORTS PAGE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub top_departments: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions { top_departments: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_employees: usize,
    pub role_distribution: Vec<Distribution>,
    pub status_distribution: Vec<Distribution>,
    /// Every department, first-encountered order.
    pub department_counts: Vec<CategoryCount>,
    pub top_departments: Vec<CategoryCount>,
    pub monthly_hires: MonthlySeries,
    pub cumulative_growth: MonthlySeries,
    /// Latest month of hires against the month before it.
    pub growth: GrowthChange,
    pub average_tenure: f64,
    pub tenure_label: String,
    pub tenure_insight: TenureInsight,
    pub tenure_message: String,
    /// Active share of the roster; `None` for an empty roster.
    pub active_rate: Option<f64>,
}

pub fn report_summary(
    employees: &[Employee],
    as_of: DateTime<Utc>,
    options: &ReportOptions,
) -> ReportSummary {
    let departments = count_by_field(employees, DEPARTMENT);
    let monthly_hires = monthly_counts(employees, CREATED_AT);
    let growth = month_over_month_growth(&monthly_hires);
    let tenure = average_tenure(employees, CREATED_AT, as_of);

    let active_rate = if employees.is_empty() {
        None
    } else {
        let active = employees.iter().filter(|e| e.is_active()).count();
        Some(share_percent(active, employees.len()))
    };

    let insight = TenureInsight::from_years(tenure);
    ReportSummary {
        total_employees: employees.len(),
        role_distribution: role_distribution(employees),
        status_distribution: status_distribution(employees),
        department_counts: departments.entries().to_vec(),
        top_departments: departments.top(options.top_departments),
        cumulative_growth: cumulative_growth(employees, CREATED_AT),
        monthly_hires,
        growth,
        average_tenure: round_to(tenure, 1),
        tenure_label: format_tenure(tenure),
        tenure_insight: insight,
        tenure_message: insight.message().to_string(),
        active_rate,
    }
}
