//! FILENAME: core/stats-engine/src/attendance.rs
//! PURPOSE: Attendance breakdowns for a day, a month, and a month calendar.
//! CONTEXT: Records reference employees weakly. Breakdowns count records as
//! they are; only `attendance_rate` cross-checks against the roster.

use chrono::{Datelike, NaiveDate};
use records::{AttendanceRecord, AttendanceStatus, Employee, RecordId};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::aggregate::share_percent;

// ============================================================================
// FILTERS
// ============================================================================

pub fn records_for_date(records: &[AttendanceRecord], date: NaiveDate) -> Vec<&AttendanceRecord> {
    records.iter().filter(|r| r.date == date).collect()
}

pub fn records_for_employee<'a>(
    records: &'a [AttendanceRecord],
    employee_id: &RecordId,
) -> Vec<&'a AttendanceRecord> {
    records.iter().filter(|r| &r.employee_id == employee_id).collect()
}

/// Employees with no attendance record on `date`, in roster order.
pub fn employees_pending_check_in<'a>(
    employees: &'a [Employee],
    records: &[AttendanceRecord],
    date: NaiveDate,
) -> Vec<&'a Employee> {
    let checked_in: FxHashSet<&RecordId> = records
        .iter()
        .filter(|r| r.date == date)
        .map(|r| &r.employee_id)
        .collect();
    employees.iter().filter(|e| !checked_in.contains(&e.id)).collect()
}

// ============================================================================
// DAY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBreakdown {
    pub date: NaiveDate,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub leave: usize,
    pub total: usize,
}

impl DayBreakdown {
    fn empty(date: NaiveDate) -> Self {
        DayBreakdown {
            date,
            present: 0,
            late: 0,
            absent: 0,
            leave: 0,
            total: 0,
        }
    }

    fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Leave => self.leave += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Late => self.late,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Leave => self.leave,
        }
    }
}

pub fn day_breakdown(records: &[AttendanceRecord], date: NaiveDate) -> DayBreakdown {
    let mut day = DayBreakdown::empty(date);
    for record in records.iter().filter(|r| r.date == date) {
        day.add(record.status);
    }
    day
}

/// Share of `expected` employees that were present or late on `date`.
/// Each employee counts once however many records they have; records for
/// employees outside `expected` are ignored. `None` for an empty roster.
pub fn attendance_rate(
    records: &[AttendanceRecord],
    date: NaiveDate,
    expected: &[Employee],
) -> Option<f64> {
    if expected.is_empty() {
        return None;
    }
    let roster: FxHashSet<&RecordId> = expected.iter().map(|e| &e.id).collect();
    let attended: FxHashSet<&RecordId> = records
        .iter()
        .filter(|r| r.date == date && r.status.is_attended())
        .map(|r| &r.employee_id)
        .filter(|id| roster.contains(id))
        .collect();
    Some(share_percent(attended.len(), roster.len()))
}

// ============================================================================
// MONTH
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub total_records: usize,
    pub present_count: usize,
    /// Present records over all records of the month; `None` if there are none.
    pub present_rate: Option<f64>,
}

pub fn month_summary(records: &[AttendanceRecord], year: i32, month: u32) -> MonthSummary {
    let in_month: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .collect();
    let present_count = in_month
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count();
    let present_rate = if in_month.is_empty() {
        None
    } else {
        Some(share_percent(present_count, in_month.len()))
    };
    MonthSummary {
        year,
        month,
        total_records: in_month.len(),
        present_count,
        present_rate,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of the 1st, Sunday = 0.
    pub first_weekday: u32,
    /// One entry per day, index 0 is the 1st.
    pub days: Vec<DayBreakdown>,
}

/// `None` for a month outside 1..=12 or a year chrono cannot represent.
pub fn month_calendar(records: &[AttendanceRecord], year: i32, month: u32) -> Option<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days_in_month = (next_first - first).num_days() as u32;

    let mut days: Vec<DayBreakdown> = first
        .iter_days()
        .take(days_in_month as usize)
        .map(DayBreakdown::empty)
        .collect();
    for record in records {
        if record.date.year() == year && record.date.month() == month {
            days[record.date.day0() as usize].add(record.status);
        }
    }

    Some(MonthCalendar {
        year,
        month,
        days_in_month,
        first_weekday: first.weekday().num_days_from_sunday(),
        days,
    })
}

/// Today's breakdown plus the selected month's summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceOverview {
    pub today: DayBreakdown,
    pub month: MonthSummary,
}

pub fn attendance_overview(
    records: &[AttendanceRecord],
    today: NaiveDate,
    year: i32,
    month: u32,
) -> AttendanceOverview {
    AttendanceOverview {
        today: day_breakdown(records, today),
        month: month_summary(records, year, month),
    }
}
