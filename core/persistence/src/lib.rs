//! FILENAME: core/persistence/src/lib.rs
//! Workforce Persistence Module
//!
//! Keeps the employee and attendance collections in a key-value `Storage`
//! (in memory or as JSON files) and exposes them through repository traits.
//!
//! Layers:
//! - `storage`: `Storage` trait, `MemoryStorage`, `FileStorage`
//! - `collection`: whole-collection load/persist shared by both stores
//! - `employees` / `attendance`: repositories with validation and id assignment
//! - `clock`: injectable time source

mod attendance;
mod clock;
mod collection;
mod employees;
mod error;
mod storage;

pub use attendance::{new_attendance_id, AttendanceRepository, LocalAttendanceStore};
pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::{Collection, StoredRecord};
pub use employees::{new_employee_id, EmployeeRepository, LocalEmployeeStore};
pub use error::PersistenceError;
pub use storage::{FileStorage, MemoryStorage, Storage};
