//! FILENAME: app/src/commands/table.rs
// PURPOSE: Employee table commands (search, role filter, sort, pagination).
// CONTEXT: Every command updates the stored query state and returns the
// freshly computed page, so the caller never has to re-query.

use query_engine::{RoleFilter, TableQueryEngine};

use crate::api_types::EmployeeTableResponse;
use crate::{log_enter, log_exit, AppState};

fn run_table<F>(state: &AppState, action: &str, change: F) -> Result<EmployeeTableResponse, String>
where
    F: FnOnce(&mut TableQueryEngine),
{
    log_enter!("TABLE", action);
    let employees = state.employees.lock().map_err(|e| e.to_string())?;
    let mut table = state.employee_table.lock().map_err(|e| e.to_string())?;
    change(&mut table);
    let page = table.query(employees.list());
    log_exit!(
        "TABLE",
        action,
        "page={}/{} filtered={} total={}",
        page.info.page,
        page.info.total_pages,
        page.info.filtered_count,
        page.info.total_count
    );
    Ok(EmployeeTableResponse::new(page, table.state().clone()))
}

/// Current page under the current state.
pub fn query_employees(state: &AppState) -> Result<EmployeeTableResponse, String> {
    run_table(state, "query_employees", |_| {})
}

pub fn set_search(state: &AppState, text: String) -> Result<EmployeeTableResponse, String> {
    run_table(state, "set_search", |table| table.search(text))
}

/// `"all"` or an exact role label (`Admin`, `User`, `Guest`).
pub fn set_role_filter(state: &AppState, role: String) -> Result<EmployeeTableResponse, String> {
    let filter = RoleFilter::parse(&role);
    run_table(state, "set_role_filter", |table| table.filter_role(filter))
}

/// Same column flips direction; a new column starts ascending.
pub fn toggle_sort(state: &AppState, column: String) -> Result<EmployeeTableResponse, String> {
    run_table(state, "toggle_sort", |table| table.sort_by(&column))
}

pub fn go_to_page(state: &AppState, page: i64) -> Result<EmployeeTableResponse, String> {
    run_table(state, "go_to_page", |table| table.go_to_page(page))
}

pub fn next_page(state: &AppState) -> Result<EmployeeTableResponse, String> {
    run_table(state, "next_page", |table| table.next_page())
}

pub fn previous_page(state: &AppState) -> Result<EmployeeTableResponse, String> {
    run_table(state, "previous_page", |table| table.previous_page())
}

pub fn reset_table_filters(state: &AppState) -> Result<EmployeeTableResponse, String> {
    run_table(state, "reset_table_filters", |table| table.reset_filters())
}
