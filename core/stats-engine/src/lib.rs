//! FILENAME: core/stats-engine/src/lib.rs
//! Statistics subsystem for the workforce dashboard.
//!
//! Every function here is a total reduction over a record snapshot: empty
//! input yields zero/empty results, nothing divides by zero, and rates
//! that have no denominator come back as `None` instead of NaN.
//!
//! Layers:
//! - `aggregate`: generic field reductions (counts, top-N, growth, tenure)
//! - `reports`: dashboard and reports-page summaries built on `aggregate`
//! - `departments`: per-department grouping
//! - `attendance`: day/month/calendar attendance breakdowns
//! - `tenure`: tenure display and retention insight

pub mod aggregate;
pub mod attendance;
pub mod departments;
pub mod reports;
pub mod tenure;

pub use aggregate::{
    average_tenure, count_by_field, cumulative_growth, month_key, month_over_month_growth,
    monthly_counts, share_percent, top_n, CategoryCount, CategoryCounts, GrowthChange,
    MonthlySeries, SECONDS_PER_YEAR,
};
pub use attendance::{
    attendance_overview, attendance_rate, day_breakdown, employees_pending_check_in,
    month_calendar, month_summary, records_for_date, records_for_employee, AttendanceOverview,
    DayBreakdown, MonthCalendar, MonthSummary,
};
pub use departments::{department_overview, DepartmentOverview, DepartmentSummary, MemberPreview};
pub use reports::{
    dashboard_stats, report_summary, role_distribution, status_distribution, DashboardStats,
    Distribution, ReportOptions, ReportSummary,
};
pub use tenure::{format_tenure, round_to, TenureInsight};
