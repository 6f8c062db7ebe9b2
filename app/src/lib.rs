//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (application state and command surface).
// CONTEXT: A host (desktop shell, HTTP adapter, tests) owns one `AppState` and
// calls the command functions with it.
//
// Layers:
// - `config`: `AppConfig` (JSON file + environment overrides)
// - `logging`: unified seq-numbered log lines and macros
// - `api_types`: request/response shapes
// - `commands`: employees, table, attendance, reports

use std::sync::{Arc, Mutex};

use persistence::{
    AttendanceRepository, Clock, EmployeeRepository, FileStorage, LocalAttendanceStore,
    LocalEmployeeStore, MemoryStorage, PersistenceError, Storage, SystemClock,
};
use query_engine::TableQueryEngine;
use records::{AttendanceRecord, Employee};

pub mod api_types;
pub mod commands;
pub mod config;
pub mod logging;

pub use api_types::*;
pub use commands::*;
pub use config::{AppConfig, ConfigError};

pub type EmployeeStore = Box<dyn EmployeeRepository + Send>;
pub type AttendanceStore = Box<dyn AttendanceRepository + Send>;

/// Shared application state.
///
/// Commands that need both stores lock `employees` before `attendance`.
pub struct AppState {
    pub employees: Mutex<EmployeeStore>,
    pub attendance: Mutex<AttendanceStore>,
    /// Employee table query state and the totals of its last page
    pub employee_table: Mutex<TableQueryEngine>,
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
}

/// In-memory state with the default configuration and an empty roster.
pub fn create_app_state() -> AppState {
    log_info!("SYS", "Creating AppState (in-memory)");
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let config = AppConfig::default();
    let employees: EmployeeStore = Box::new(LocalEmployeeStore::empty(MemoryStorage::new(), clock.clone()));
    let attendance: AttendanceStore =
        Box::new(LocalAttendanceStore::empty(MemoryStorage::new(), clock.clone()));
    AppState {
        employees: Mutex::new(employees),
        attendance: Mutex::new(attendance),
        employee_table: Mutex::new(TableQueryEngine::new(config.table_config())),
        config,
        clock,
    }
}

/// File-backed state in `config.data_dir`. Opens the log file when one is
/// configured and seeds an empty roster from `config.seed_file`.
pub fn create_app_state_with(config: AppConfig) -> Result<AppState, String> {
    if let Some(path) = &config.log_file {
        logging::init_log_file(path)?;
    }
    log_info!("SYS", "Creating AppState data_dir={:?}", config.data_dir);

    let seed = config.load_seed_employees().map_err(|e| e.to_string())?;
    let storage = FileStorage::new(&config.data_dir);
    create_app_state_from(config, storage, Arc::new(SystemClock), seed, Vec::new())
}

/// State over any storage backend with an explicit clock and seed data.
pub fn create_app_state_from<S>(
    config: AppConfig,
    storage: S,
    clock: Arc<dyn Clock>,
    employee_seed: Vec<Employee>,
    attendance_seed: Vec<AttendanceRecord>,
) -> Result<AppState, String>
where
    S: Storage + Clone + Send + 'static,
{
    let employees = open_employees(storage.clone(), clock.clone(), employee_seed)?;
    let attendance = open_attendance(storage, clock.clone(), attendance_seed)?;
    log_info!(
        "SYS",
        "loaded employees={} attendance={}",
        employees.list().len(),
        attendance.list().len()
    );

    Ok(AppState {
        employees: Mutex::new(employees),
        attendance: Mutex::new(attendance),
        employee_table: Mutex::new(TableQueryEngine::new(config.table_config())),
        config,
        clock,
    })
}

// ============================================================================
// STORE SETUP
// ============================================================================

/// Unreadable stored data is logged and replaced by the seed.
fn open_employees<S>(storage: S, clock: Arc<dyn Clock>, seed: Vec<Employee>) -> Result<EmployeeStore, String>
where
    S: Storage + Clone + Send + 'static,
{
    match LocalEmployeeStore::load_or_seed(storage.clone(), clock.clone(), seed.clone()) {
        Ok(store) => Ok(Box::new(store)),
        Err(PersistenceError::InvalidFormat(reason)) => {
            log_warn!("STORE", "employees unreadable, starting from seed: {}", reason);
            let store = LocalEmployeeStore::with_records(storage, clock, seed).map_err(|e| e.to_string())?;
            Ok(Box::new(store))
        }
        Err(e) => {
            log_error!("STORE", "employees could not be opened: {}", e);
            Err(e.to_string())
        }
    }
}

fn open_attendance<S>(
    storage: S,
    clock: Arc<dyn Clock>,
    seed: Vec<AttendanceRecord>,
) -> Result<AttendanceStore, String>
where
    S: Storage + Clone + Send + 'static,
{
    match LocalAttendanceStore::load_or_seed(storage.clone(), clock.clone(), seed.clone()) {
        Ok(store) => Ok(Box::new(store)),
        Err(PersistenceError::InvalidFormat(reason)) => {
            log_warn!("STORE", "attendance unreadable, starting from seed: {}", reason);
            let store = LocalAttendanceStore::with_records(storage, clock, seed).map_err(|e| e.to_string())?;
            Ok(Box::new(store))
        }
        Err(e) => {
            log_error!("STORE", "attendance could not be opened: {}", e);
            Err(e.to_string())
        }
    }
}
