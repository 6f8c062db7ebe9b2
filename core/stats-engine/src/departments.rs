//! FILENAME: core/stats-engine/src/departments.rs
//! PURPOSE: Per-department grouping for the departments overview.
//! CONTEXT: Employees without a department belong to no group. Roster-wide
//! totals live in `reports`.

use records::{Employee, RecordId};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Compact member entry for a department card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPreview {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// First character of the name, uppercased. Empty for an empty name.
    pub initial: String,
}

impl MemberPreview {
    fn of(employee: &Employee) -> Self {
        let initial = employee
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        MemberPreview {
            id: employee.id.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            initial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub name: String,
    pub count: usize,
    pub active_count: usize,
    /// Members that are not active, including those with no status.
    pub inactive_count: usize,
    pub preview: Vec<MemberPreview>,
    /// Members beyond the preview ("+N more").
    pub more_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentOverview {
    pub departments: Vec<DepartmentSummary>,
    pub department_count: usize,
    /// Employees that belong to some department.
    pub assigned_count: usize,
    /// Assigned employees per department; `None` without departments.
    pub average_department_size: Option<f64>,
}

/// Groups employees by department, largest first. Ties keep the order in
/// which departments were first seen. `preview_limit` caps the member list
/// on each summary.
pub fn department_overview(employees: &[Employee], preview_limit: usize) -> DepartmentOverview {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(&str, Vec<&Employee>)> = Vec::new();

    for employee in employees {
        let Some(department) = employee.department.as_deref() else {
            continue;
        };
        match index.get(department) {
            Some(&pos) => groups[pos].1.push(employee),
            None => {
                index.insert(department, groups.len());
                groups.push((department, vec![employee]));
            }
        }
    }

    let mut departments: Vec<DepartmentSummary> = groups
        .into_iter()
        .map(|(name, members)| {
            let count = members.len();
            let active_count = members.iter().filter(|e| e.is_active()).count();
            DepartmentSummary {
                name: name.to_string(),
                count,
                active_count,
                inactive_count: count - active_count,
                preview: members
                    .iter()
                    .take(preview_limit)
                    .map(|e| MemberPreview::of(e))
                    .collect(),
                more_count: count.saturating_sub(preview_limit),
            }
        })
        .collect();
    departments.sort_by(|a, b| b.count.cmp(&a.count));

    let assigned_count: usize = departments.iter().map(|d| d.count).sum();
    let department_count = departments.len();
    let average_department_size = if department_count == 0 {
        None
    } else {
        Some(assigned_count as f64 / department_count as f64)
    };

    DepartmentOverview {
        departments,
        department_count,
        assigned_count,
        average_department_size,
    }
}
