//! FILENAME: core/records/src/lib.rs
//! Workforce records model.
//!
//! Shared types for every other crate in the workspace: employees,
//! attendance records, their identifiers, and the declared field schema
//! the query and statistics engines read values through.
//!
//! Layers:
//! - `field`: schema declarations and the `Record` access trait
//! - `id`: record identifiers (integer or string)
//! - `employee` / `attendance`: the two record types plus create/patch drafts
//! - `validation`: boundary checks applied before data reaches a store

pub mod attendance;
pub mod employee;
pub mod field;
pub mod id;
pub mod validation;

pub use attendance::{AttendancePatch, AttendanceRecord, AttendanceStatus, NewAttendance};
pub use employee::{Employee, EmployeePatch, EmployeeStatus, NewEmployee, Role};
pub use field::{FieldDef, FieldKind, FieldValue, Record};
pub use id::RecordId;
pub use validation::{
    validate_attendance_patch, validate_employee_patch, validate_new_attendance,
    validate_new_employee, FieldError,
};
