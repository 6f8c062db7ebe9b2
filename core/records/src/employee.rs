//! FILENAME: core/records/src/employee.rs
//! PURPOSE: Employee record, its enums, and the create/patch drafts.
//! CONTEXT: Wire form is camelCase JSON, identical to what the store keeps
//! under the `employees` key.

use crate::field::{FieldDef, FieldKind, FieldValue, Record};
use crate::id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ENUMS
// ============================================================================

/// Access role of an employee account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Guest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Guest => "Guest",
        }
    }

    /// Parses the wire label. Matching is exact.
    pub fn parse(label: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Active, EmployeeStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// EMPLOYEE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status == Some(EmployeeStatus::Active)
    }

    /// Applies a partial update. `id` and `created_at` are never touched.
    pub fn apply_patch(&mut self, patch: &EmployeePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(department) = &patch.department {
            self.department = Some(department.clone());
        }
        if let Some(status) = patch.status {
            self.status = Some(status);
        }
    }
}

const EMPLOYEE_SCHEMA: &[FieldDef] = &[
    FieldDef::new("id", FieldKind::Number),
    FieldDef::new("name", FieldKind::Text),
    FieldDef::new("email", FieldKind::Text),
    FieldDef::new("role", FieldKind::Enum),
    FieldDef::new("department", FieldKind::Text),
    FieldDef::new("status", FieldKind::Enum),
    FieldDef::new("createdAt", FieldKind::Date),
];

impl Record for Employee {
    fn schema() -> &'static [FieldDef] {
        EMPLOYEE_SCHEMA
    }

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            // String ids surface as text; sorting a roster with both forms
            // hits the mismatched-type rule and leaves those pairs in place.
            "id" => match &self.id {
                RecordId::Number(n) => FieldValue::Number(*n as f64),
                RecordId::Text(s) => FieldValue::Text(s),
            },
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "role" => FieldValue::Text(self.role.as_str()),
            "department" => self
                .department
                .as_deref()
                .map_or(FieldValue::Missing, FieldValue::Text),
            "status" => self
                .status
                .map_or(FieldValue::Missing, |s| FieldValue::Text(s.as_str())),
            "createdAt" => FieldValue::Date(self.created_at),
            _ => FieldValue::Missing,
        }
    }
}

// ============================================================================
// DRAFTS
// ============================================================================

/// Everything needed to create an employee; the store assigns `id` and
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
}

impl NewEmployee {
    pub fn into_employee(self, id: RecordId, created_at: DateTime<Utc>) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at,
            department: self.department,
            status: self.status,
        }
    }
}

/// Partial update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self == &EmployeePatch::default()
    }
}
