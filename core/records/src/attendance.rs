//! FILENAME: core/records/src/attendance.rs
//! PURPOSE: Attendance record and its create/patch drafts.
//! CONTEXT: `employee_id` is a weak back-reference. Deleting an employee
//! leaves its attendance history in place.

use crate::field::{FieldDef, FieldKind, FieldValue, Record};
use crate::id::RecordId;
use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Leave,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
        AttendanceStatus::Leave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
        }
    }

    /// Whether the employee actually showed up.
    pub fn is_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub employee_id: RecordId,
    /// Display name captured at check-in time.
    pub employee_name: String,
    pub date: NaiveDate,
    /// `HH:MM`, 24h.
    pub check_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    pub fn apply_patch(&mut self, patch: &AttendancePatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(check_in) = &patch.check_in {
            self.check_in = check_in.clone();
        }
        if let Some(check_out) = &patch.check_out {
            self.check_out = Some(check_out.clone());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = &patch.notes {
            self.notes = if notes.trim().is_empty() { None } else { Some(notes.clone()) };
        }
    }
}

const ATTENDANCE_SCHEMA: &[FieldDef] = &[
    FieldDef::new("id", FieldKind::Text),
    FieldDef::new("employeeId", FieldKind::Number),
    FieldDef::new("employeeName", FieldKind::Text),
    FieldDef::new("date", FieldKind::Date),
    FieldDef::new("checkIn", FieldKind::Text),
    FieldDef::new("checkOut", FieldKind::Text),
    FieldDef::new("status", FieldKind::Enum),
    FieldDef::new("notes", FieldKind::Text),
];

fn id_value(id: &RecordId) -> FieldValue<'_> {
    match id {
        RecordId::Number(n) => FieldValue::Number(*n as f64),
        RecordId::Text(s) => FieldValue::Text(s),
    }
}

impl Record for AttendanceRecord {
    fn schema() -> &'static [FieldDef] {
        ATTENDANCE_SCHEMA
    }

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "id" => id_value(&self.id),
            "employeeId" => id_value(&self.employee_id),
            "employeeName" => FieldValue::Text(&self.employee_name),
            "date" => self
                .date
                .and_hms_opt(0, 0, 0)
                .map_or(FieldValue::Missing, |naive| {
                    FieldValue::Date(Utc.from_utc_datetime(&naive))
                }),
            "checkIn" => FieldValue::Text(&self.check_in),
            "checkOut" => self
                .check_out
                .as_deref()
                .map_or(FieldValue::Missing, FieldValue::Text),
            "status" => FieldValue::Text(self.status.as_str()),
            "notes" => self
                .notes
                .as_deref()
                .map_or(FieldValue::Missing, FieldValue::Text),
            _ => FieldValue::Missing,
        }
    }
}

/// Create draft; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub employee_id: RecordId,
    pub employee_name: String,
    pub date: NaiveDate,
    pub check_in: String,
    #[serde(default)]
    pub check_out: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewAttendance {
    pub fn into_record(self, id: RecordId) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            date: self.date,
            check_in: self.check_in,
            check_out: self.check_out,
            status: self.status,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
    /// A blank string clears the notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
