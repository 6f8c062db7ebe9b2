//! FILENAME: app/src/commands/employees.rs
// PURPOSE: Employee CRUD commands.

use records::{Employee, EmployeePatch, NewEmployee, RecordId};

use crate::{log_debug, log_enter_info, log_exit_info, log_warn, AppState};

/// Whole roster in stored order.
pub fn get_employees(state: &AppState) -> Result<Vec<Employee>, String> {
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    log_debug!("EMP", "get_employees count={}", employees.list().len());
    Ok(employees.list().to_vec())
}

pub fn get_employee(state: &AppState, id: RecordId) -> Result<Option<Employee>, String> {
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    Ok(employees.get(&id).cloned())
}

pub fn add_employee(state: &AppState, draft: NewEmployee) -> Result<Employee, String> {
    log_enter_info!("EMP", "add_employee", "name={}", draft.name);
    let mut employees = state.employees.lock().map_err(|e| e.to_string())?;
    let created = employees.create(draft).map_err(|e| {
        log_warn!("EMP", "add_employee rejected: {}", e);
        e.to_string()
    })?;
    log_exit_info!("EMP", "add_employee", "id={}", created.id);
    Ok(created)
}

/// `id` and `createdAt` are never changed by an update.
pub fn update_employee(state: &AppState, id: RecordId, patch: EmployeePatch) -> Result<Employee, String> {
    log_enter_info!("EMP", "update_employee", "id={}", id);
    let mut employees = state.employees.lock().map_err(|e| e.to_string())?;
    let updated = employees.update(&id, &patch).map_err(|e| {
        log_warn!("EMP", "update_employee id={} failed: {}", id, e);
        e.to_string()
    })?;
    log_exit_info!("EMP", "update_employee", "id={}", updated.id);
    Ok(updated)
}

/// Attendance records of the employee are kept.
pub fn delete_employee(state: &AppState, id: RecordId) -> Result<Employee, String> {
    log_enter_info!("EMP", "delete_employee", "id={}", id);
    let mut employees = state.employees.lock().map_err(|e| e.to_string())?;
    let removed = employees.delete(&id).map_err(|e| e.to_string())?;
    log_exit_info!("EMP", "delete_employee", "id={} remaining={}", removed.id, employees.list().len());
    Ok(removed)
}
