//! FILENAME: core/records/src/field.rs
//! PURPOSE: Declared field schema and typed value access.
//! CONTEXT: The query engine sorts and the stats engine groups by field
//! name. Each record type declares which names exist and what semantic
//! type they carry, so the engines never inspect raw JSON.

use chrono::{DateTime, Utc};

// ============================================================================
// SCHEMA
// ============================================================================

/// Semantic type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, compared case-insensitively.
    Text,
    /// Closed set of labels (role, status).
    Enum,
    Number,
    Date,
}

/// One entry of a record type's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        FieldDef { name, kind }
    }
}

// ============================================================================
// VALUES
// ============================================================================

/// A borrowed view of one field of one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Field is unknown, or optional and not set.
    Missing,
    Text(&'a str),
    Number(f64),
    Date(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// The label this value is grouped under when counting categories.
    /// Numbers drop a trailing `.0`; dates group by calendar day.
    pub fn category_key(&self) -> Option<String> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Text(s) => Some((*s).to_string()),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{:.0}", n))
                } else {
                    Some(format!("{}", n))
                }
            }
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
        }
    }
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// Field-name access into a record, backed by a static schema.
pub trait Record {
    /// Declared fields of this record type.
    fn schema() -> &'static [FieldDef]
    where
        Self: Sized;

    /// Value of `field`, or `FieldValue::Missing` for unknown/absent fields.
    fn value(&self, field: &str) -> FieldValue<'_>;

    fn kind_of(field: &str) -> Option<FieldKind>
    where
        Self: Sized,
    {
        Self::schema()
            .iter()
            .find(|def| def.name == field)
            .map(|def| def.kind)
    }

    fn has_field(field: &str) -> bool
    where
        Self: Sized,
    {
        Self::kind_of(field).is_some()
    }
}
