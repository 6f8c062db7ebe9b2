//! FILENAME: app/src/commands/attendance.rs
// PURPOSE: Attendance commands (listing, quick check-in, edits, calendar).
// CONTEXT: Check-in takes the date and time from the injected clock and the
// employee name from the roster. An employee checks in at most once per day.

use chrono::{Datelike, NaiveDate};
use records::{AttendancePatch, AttendanceRecord, NewAttendance, RecordId};
use stats_engine::{
    attendance_overview, day_breakdown, employees_pending_check_in, month_calendar,
    records_for_date, records_for_employee, AttendanceOverview, MonthCalendar,
};

use crate::api_types::{CheckInCandidate, CheckInRequest, TodayAttendanceResponse};
use crate::{log_debug, log_enter_info, log_exit_info, log_warn, AppState};

// ============================================================================
// QUERIES
// ============================================================================

pub fn get_attendance(state: &AppState) -> Result<Vec<AttendanceRecord>, String> {
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    Ok(attendance.list().to_vec())
}

pub fn get_attendance_by_date(state: &AppState, date: NaiveDate) -> Result<Vec<AttendanceRecord>, String> {
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    let records: Vec<AttendanceRecord> =
        records_for_date(attendance.list(), date).into_iter().cloned().collect();
    log_debug!("ATT", "get_attendance_by_date date={} count={}", date, records.len());
    Ok(records)
}

pub fn get_attendance_by_employee(
    state: &AppState,
    employee_id: RecordId,
) -> Result<Vec<AttendanceRecord>, String> {
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    Ok(records_for_employee(attendance.list(), &employee_id)
        .into_iter()
        .cloned()
        .collect())
}

pub fn get_today_attendance(state: &AppState) -> Result<TodayAttendanceResponse, String> {
    let today = state.clock.today();
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    let records: Vec<AttendanceRecord> =
        records_for_date(attendance.list(), today).into_iter().cloned().collect();
    Ok(TodayAttendanceResponse {
        date: today,
        breakdown: day_breakdown(&records, today),
        records,
    })
}

/// Employees that have not checked in today, in roster order.
pub fn available_for_check_in(state: &AppState) -> Result<Vec<CheckInCandidate>, String> {
    let today = state.clock.today();
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    Ok(employees_pending_check_in(employees.list(), attendance.list(), today)
        .into_iter()
        .map(CheckInCandidate::from)
        .collect())
}

// ============================================================================
// MUTATIONS
// ============================================================================

pub fn check_in(state: &AppState, request: CheckInRequest) -> Result<AttendanceRecord, String> {
    log_enter_info!("ATT", "check_in", "employee={} status={}", request.employee_id, request.status);
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    let employee = employees
        .get(&request.employee_id)
        .ok_or_else(|| format!("Employee not found: {}", request.employee_id))?;

    let now = state.clock.now();
    let today = now.date_naive();
    let mut attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    if records_for_date(attendance.list(), today)
        .iter()
        .any(|r| r.employee_id == employee.id)
    {
        log_warn!("ATT", "check_in duplicate employee={} date={}", employee.id, today);
        return Err(format!("{} has already checked in on {}", employee.name, today));
    }

    let draft = NewAttendance {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        date: today,
        check_in: now.format("%H:%M").to_string(),
        check_out: None,
        status: request.status,
        notes: request.notes,
    };
    let record = attendance.create(draft).map_err(|e| e.to_string())?;
    log_exit_info!("ATT", "check_in", "id={} at={}", record.id, record.check_in);
    Ok(record)
}

pub fn update_attendance(
    state: &AppState,
    id: RecordId,
    patch: AttendancePatch,
) -> Result<AttendanceRecord, String> {
    log_enter_info!("ATT", "update_attendance", "id={}", id);
    let mut attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    let updated = attendance.update(&id, &patch).map_err(|e| {
        log_warn!("ATT", "update_attendance id={} failed: {}", id, e);
        e.to_string()
    })?;
    log_exit_info!("ATT", "update_attendance", "id={}", updated.id);
    Ok(updated)
}

pub fn delete_attendance(state: &AppState, id: RecordId) -> Result<AttendanceRecord, String> {
    log_enter_info!("ATT", "delete_attendance", "id={}", id);
    let mut attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    let removed = attendance.delete(&id).map_err(|e| e.to_string())?;
    log_exit_info!("ATT", "delete_attendance", "id={}", removed.id);
    Ok(removed)
}

// ============================================================================
// CALENDAR / OVERVIEW
// ============================================================================

/// `month` is 1-based.
pub fn get_month_calendar(state: &AppState, year: i32, month: u32) -> Result<MonthCalendar, String> {
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    month_calendar(attendance.list(), year, month)
        .ok_or_else(|| format!("Invalid month: {}-{}", year, month))
}

/// Month defaults to the current one when either part is missing.
pub fn get_attendance_overview(
    state: &AppState,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<AttendanceOverview, String> {
    let today = state.clock.today();
    let (year, month) = match (year, month) {
        (Some(y), Some(m)) if (1..=12).contains(&m) => (y, m),
        (Some(y), Some(m)) => return Err(format!("Invalid month: {}-{}", y, m)),
        _ => (today.year(), today.month()),
    };
    let attendance = state.attendance.lock().map_err(|e| e.to_string())?;
    Ok(attendance_overview(attendance.list(), today, year, month))
}
