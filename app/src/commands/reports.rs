//! FILENAME: app/src/commands/reports.rs
// PURPOSE: Dashboard, reports page and department overview commands.

use stats_engine::{
    dashboard_stats, department_overview, report_summary, DashboardStats, DepartmentOverview,
    ReportSummary,
};

use crate::{log_debug, AppState};

pub fn get_dashboard_stats(state: &AppState) -> Result<DashboardStats, String> {
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    let stats = dashboard_stats(
        employees.list(),
        attendance.list(),
        state.clock.today(),
        state.clock.now(),
    );
    log_debug!(
        "REPORT",
        "dashboard total={} rate={:?}",
        stats.total_employees,
        stats.attendance_rate
    );
    Ok(stats)
}

pub fn get_report_summary(state: &AppState) -> Result<ReportSummary, String> {
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    Ok(report_summary(
        employees.list(),
        state.clock.now(),
        &state.config.report_options(),
    ))
}

pub fn get_department_overview(state: &AppState) -> Result<DepartmentOverview, String> {
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    let overview = department_overview(employees.list(), state.config.department_preview);
    log_debug!("REPORT", "departments={}", overview.department_count);
    Ok(overview)
}
