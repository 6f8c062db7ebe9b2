//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared request/response types for the command layer.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use chrono::{DateTime, NaiveDate, Utc};
use query_engine::{PageInfo, QueryPage, QueryState};
use records::{AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, RecordId, Role};
use serde::{Deserialize, Serialize};
use stats_engine::DayBreakdown;

/// One row of the employee table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    pub created_at: DateTime<Utc>,
    /// `createdAt` as `YYYY-MM-DD`.
    pub joined: String,
    /// Avatar letter.
    pub initial: String,
}

impl From<Employee> for EmployeeRow {
    fn from(e: Employee) -> Self {
        let initial = e
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        EmployeeRow {
            joined: e.created_at.format("%Y-%m-%d").to_string(),
            initial,
            id: e.id,
            name: e.name,
            email: e.email,
            role: e.role,
            department: e.department,
            status: e.status,
            created_at: e.created_at,
        }
    }
}

/// A table page plus the state that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTableResponse {
    pub rows: Vec<EmployeeRow>,
    #[serde(flatten)]
    pub info: PageInfo,
    pub state: QueryState,
    /// 1-based item range shown ("Showing x to y of z"); absent when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing_from: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing_to: Option<usize>,
}

impl EmployeeTableResponse {
    pub fn new(page: QueryPage<Employee>, state: QueryState) -> Self {
        let range = page.info.page_range();
        let page = page.map_rows(EmployeeRow::from);
        EmployeeTableResponse {
            rows: page.rows,
            info: page.info,
            state,
            showing_from: range.map(|(from, _)| from),
            showing_to: range.map(|(_, to)| to),
        }
    }
}

/// Quick check-in form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub employee_id: RecordId,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Employee offered in the check-in picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInCandidate {
    pub id: RecordId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl From<&Employee> for CheckInCandidate {
    fn from(e: &Employee) -> Self {
        CheckInCandidate {
            id: e.id.clone(),
            name: e.name.clone(),
            department: e.department.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayAttendanceResponse {
    pub date: NaiveDate,
    pub records: Vec<AttendanceRecord>,
    pub breakdown: DayBreakdown,
}
