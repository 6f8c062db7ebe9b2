//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for workforce integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use app_lib::{create_app_state, create_app_state_from, AppConfig, AppState};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use persistence::{Clock, FixedClock, MemoryStorage};
use records::{
    AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, NewEmployee, RecordId, Role,
};

/// Instant every fixture harness treats as "now": Friday 2024-03-15 09:30 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
}

pub fn today() -> NaiveDate {
    fixed_now().date_naive()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Empty in-memory state on the system clock.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Empty roster on the fixed clock.
    pub fn empty() -> Self {
        Self::build(AppConfig::default(), Vec::new(), Vec::new())
    }

    /// The twelve-person roster with no attendance.
    pub fn with_roster() -> Self {
        Self::build(AppConfig::default(), RosterFixture::employees(), Vec::new())
    }

    /// Roster plus a few days of attendance around `today()`.
    pub fn with_attendance() -> Self {
        Self::build(
            AppConfig::default(),
            RosterFixture::employees(),
            AttendanceFixture::records(),
        )
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::build(config, RosterFixture::employees(), AttendanceFixture::records())
    }

    fn build(config: AppConfig, employees: Vec<Employee>, attendance: Vec<AttendanceRecord>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(fixed_now()));
        TestHarness {
            state: create_app_state_from(config, MemoryStorage::new(), clock, employees, attendance)
                .unwrap(),
        }
    }

    pub fn employee_count(&self) -> usize {
        self.state.employees.lock().unwrap().list().len()
    }

    pub fn attendance_count(&self) -> usize {
        self.state.attendance.lock().unwrap().list().len()
    }

    pub fn employee(&self, id: u64) -> Option<Employee> {
        self.state
            .employees
            .lock()
            .unwrap()
            .get(&RecordId::Number(id))
            .cloned()
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub struct RosterFixture;

impl RosterFixture {
    /// (name, email, role, department, status, joined)
    pub fn data() -> Vec<(&'static str, &'static str, Role, &'static str, EmployeeStatus, (i32, u32, u32))> {
        vec![
            ("Alice Johnson", "alice@corp.com", Role::Admin, "Engineering", EmployeeStatus::Active, (2020, 1, 15)),
            ("Bob Smith", "bob@corp.com", Role::User, "Engineering", EmployeeStatus::Active, (2021, 6, 1)),
            ("Carla Diaz", "carla@corp.com", Role::User, "Sales", EmployeeStatus::Active, (2022, 3, 10)),
            ("David Kim", "david@corp.com", Role::Guest, "Sales", EmployeeStatus::Inactive, (2022, 9, 20)),
            ("Emma Brown", "emma@corp.com", Role::User, "Marketing", EmployeeStatus::Active, (2023, 1, 5)),
            ("Frank Moore", "frank@corp.com", Role::Admin, "Engineering", EmployeeStatus::Active, (2023, 4, 18)),
            ("Grace Lee", "grace@corp.com", Role::User, "HR", EmployeeStatus::Active, (2023, 7, 2)),
            ("Henry Wilson", "henry@corp.com", Role::Guest, "Sales", EmployeeStatus::Inactive, (2023, 11, 30)),
            ("Irene Clark", "irene@corp.com", Role::User, "Engineering", EmployeeStatus::Active, (2024, 1, 8)),
            ("Jack Turner", "jack@corp.com", Role::User, "Marketing", EmployeeStatus::Active, (2024, 2, 12)),
            ("Karen Hall", "karen@corp.com", Role::User, "Finance", EmployeeStatus::Active, (2024, 2, 26)),
            ("Liam Young", "liam@corp.com", Role::Guest, "Engineering", EmployeeStatus::Active, (2024, 3, 4)),
        ]
    }

    /// Ids are 1-based in `data()` order.
    pub fn employees() -> Vec<Employee> {
        Self::data()
            .into_iter()
            .enumerate()
            .map(|(i, (name, email, role, department, status, (y, m, d)))| Employee {
                id: RecordId::Number(i as u64 + 1),
                name: name.to_string(),
                email: email.to_string(),
                role,
                created_at: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
                department: Some(department.to_string()),
                status: Some(status),
            })
            .collect()
    }

    pub fn new_employee(name: &str, department: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            email: format!("{}@corp.com", name.split_whitespace().next().unwrap_or(name).to_lowercase()),
            role: Role::User,
            department: Some(department.to_string()),
            status: Some(EmployeeStatus::Active),
        }
    }
}

pub struct AttendanceFixture;

impl AttendanceFixture {
    /// Today: 1 present, 2 late, 3 absent, 4 leave. Plus history on the
    /// 14th and in February.
    pub fn records() -> Vec<AttendanceRecord> {
        let roster = RosterFixture::employees();
        let rows: Vec<(u64, NaiveDate, &str, Option<&str>, AttendanceStatus)> = vec![
            (1, today(), "08:55", None, AttendanceStatus::Present),
            (2, today(), "09:20", None, AttendanceStatus::Late),
            (3, today(), "09:00", None, AttendanceStatus::Absent),
            (4, today(), "09:00", None, AttendanceStatus::Leave),
            (1, date(2024, 3, 14), "08:50", Some("17:30"), AttendanceStatus::Present),
            (2, date(2024, 3, 14), "08:45", Some("17:00"), AttendanceStatus::Present),
            (5, date(2024, 3, 14), "09:40", Some("18:00"), AttendanceStatus::Late),
            (1, date(2024, 2, 20), "08:58", Some("17:10"), AttendanceStatus::Present),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (emp, day, check_in, check_out, status))| AttendanceRecord {
                id: RecordId::Number(100 + i as u64),
                employee_id: RecordId::Number(emp),
                employee_name: roster[emp as usize - 1].name.clone(),
                date: day,
                check_in: check_in.to_string(),
                check_out: check_out.map(str::to_string),
                status,
                notes: None,
            })
            .collect()
    }
}
