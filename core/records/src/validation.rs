//! FILENAME: core/records/src/validation.rs
//! PURPOSE: Boundary validation for employee and attendance drafts.
//! CONTEXT: Stores run these before accepting a create or update, so the
//! engines downstream only ever see well-formed records.

use crate::attendance::{AttendancePatch, AttendanceRecord, NewAttendance};
use crate::employee::{EmployeePatch, NewEmployee};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

pub const MIN_NAME_LEN: usize = 3;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ============================================================================
// EMPLOYEES
// ============================================================================

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    } else if trimmed.chars().count() < MIN_NAME_LEN {
        errors.push(FieldError::new("name", "Name must be at least 3 characters"));
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_PATTERN.is_match(trimmed) {
        errors.push(FieldError::new("email", "Email is invalid"));
    }
}

pub fn validate_new_employee(draft: &NewEmployee) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_name(&draft.name, &mut errors);
    check_email(&draft.email, &mut errors);
    if draft.department.as_deref().map_or(true, |d| d.trim().is_empty()) {
        errors.push(FieldError::new("department", "Department is required"));
    }
    errors
}

pub fn validate_employee_patch(patch: &EmployeePatch) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(name) = &patch.name {
        check_name(name, &mut errors);
    }
    if let Some(email) = &patch.email {
        check_email(email, &mut errors);
    }
    if let Some(department) = &patch.department {
        if department.trim().is_empty() {
            errors.push(FieldError::new("department", "Department is required"));
        }
    }
    errors
}

// ============================================================================
// ATTENDANCE
// ============================================================================

fn check_times(check_in: &str, check_out: Option<&str>, errors: &mut Vec<FieldError>) {
    let in_ok = CLOCK_PATTERN.is_match(check_in);
    if !in_ok {
        errors.push(FieldError::new("checkIn", "Check-in must be HH:MM"));
    }
    if let Some(out) = check_out {
        if !CLOCK_PATTERN.is_match(out) {
            errors.push(FieldError::new("checkOut", "Check-out must be HH:MM"));
        } else if in_ok && out < check_in {
            // Zero-padded HH:MM orders correctly as text.
            errors.push(FieldError::new("checkOut", "Check-out cannot be before check-in"));
        }
    }
}

pub fn validate_new_attendance(draft: &NewAttendance) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if draft.employee_name.trim().is_empty() {
        errors.push(FieldError::new("employeeName", "Employee name is required"));
    }
    check_times(&draft.check_in, draft.check_out.as_deref(), &mut errors);
    errors
}

/// Validates `patch` as it would look applied on top of `current`.
pub fn validate_attendance_patch(current: &AttendanceRecord, patch: &AttendancePatch) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let check_in = patch.check_in.as_deref().unwrap_or(&current.check_in);
    let check_out = patch.check_out.as_deref().or(current.check_out.as_deref());
    check_times(check_in, check_out, &mut errors);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttendanceStatus, RecordId, Role};
    use chrono::NaiveDate;

    fn draft(name: &str, email: &str, department: Option<&str>) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            department: department.map(|d| d.to_string()),
            status: None,
        }
    }

    #[test]
    fn test_valid_employee() {
        assert!(validate_new_employee(&draft("Ann Lee", "ann@x.com", Some("Sales"))).is_empty());
    }

    #[test]
    fn test_employee_errors() {
        let errors = validate_new_employee(&draft("Al", "not-an-email", None));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "department"]);
        assert_eq!(errors[0].message, "Name must be at least 3 characters");
    }

    #[test]
    fn test_empty_fields_are_required() {
        let errors = validate_new_employee(&draft("  ", "", Some(" ")));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[1].message, "Email is required");
    }

    #[test]
    fn test_patch_only_checks_present_fields() {
        assert!(validate_employee_patch(&EmployeePatch::default()).is_empty());
        let bad = EmployeePatch {
            department: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(validate_employee_patch(&bad).len(), 1);
    }

    #[test]
    fn test_attendance_times() {
        let mut d = NewAttendance {
            employee_id: RecordId::Number(1),
            employee_name: "Ann".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            check_in: "09:15".to_string(),
            check_out: Some("17:30".to_string()),
            status: AttendanceStatus::Present,
            notes: None,
        };
        assert!(validate_new_attendance(&d).is_empty());

        d.check_out = Some("08:00".to_string());
        assert_eq!(validate_new_attendance(&d)[0].message, "Check-out cannot be before check-in");

        d.check_in = "9:15".to_string();
        d.check_out = None;
        assert_eq!(validate_new_attendance(&d)[0].field, "checkIn");
    }

    #[test]
    fn test_attendance_patch_uses_current_values() {
        let current = NewAttendance {
            employee_id: RecordId::Number(1),
            employee_name: "Ann".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            check_in: "09:15".to_string(),
            check_out: None,
            status: AttendanceStatus::Present,
            notes: None,
        }
        .into_record(RecordId::from("att_1"));
        let patch = AttendancePatch {
            check_out: Some("09:00".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_attendance_patch(&current, &patch).len(), 1);
    }
}
