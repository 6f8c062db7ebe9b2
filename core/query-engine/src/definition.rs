//! FILENAME: core/query-engine/src/definition.rs
//! Query definition - the serializable description of one table request.
//!
//! These structures are designed to be:
//! - Serializable (the view layer keeps them between renders)
//! - Immutable snapshots of user intent; every transition returns a new value
//! - Normalized at query time rather than rejected (bad pages clamp,
//!   unknown sort columns mean "no sort")

use records::Role;
use serde::{Deserialize, Serialize};

use crate::view::PageInfo;

pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// CONFIG
// ============================================================================

/// Fixed per table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub page_size: usize,
}

impl TableConfig {
    pub fn new(page_size: usize) -> Self {
        TableConfig {
            page_size: page_size.max(1),
        }
    }

    /// Page size with zero treated as one.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// ============================================================================
// SORT & FILTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

/// Active sort: a field name from the record schema and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        SortSpec {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        SortSpec {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Equality filter on `role`. Serialized as `"all"` or `{"only": "<Role>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleFilter {
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn matches(&self, role_label: Option<&str>) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(role) => role_label == Some(role.as_str()),
        }
    }

    /// `"all"` or an exact role label; anything else disables the filter.
    pub fn parse(label: &str) -> RoleFilter {
        Role::parse(label).map_or(RoleFilter::All, RoleFilter::Only)
    }
}

impl Default for RoleFilter {
    fn default() -> Self {
        RoleFilter::All
    }
}

// ============================================================================
// QUERY STATE
// ============================================================================

/// Everything that drives one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub role_filter: RoleFilter,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// 1-based. Clamped against the result size when the query runs.
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search_text: String::new(),
            role_filter: RoleFilter::All,
            sort: None,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New search text; the old page position no longer applies.
    pub fn with_search(&self, text: impl Into<String>) -> Self {
        QueryState {
            search_text: text.into(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_role_filter(&self, filter: RoleFilter) -> Self {
        QueryState {
            role_filter: filter,
            page: 1,
            ..self.clone()
        }
    }

    /// Same column flips direction; a new column starts ascending.
    pub fn toggle_sort(&self, column: &str) -> Self {
        let sort = match &self.sort {
            Some(current) if current.column == column => SortSpec {
                column: current.column.clone(),
                direction: current.direction.flipped(),
            },
            _ => SortSpec::ascending(column),
        };
        QueryState {
            sort: Some(sort),
            page: 1,
            ..self.clone()
        }
    }

    /// Requests a page. Values below 1 become 1; the upper bound is applied
    /// by the engine once the filtered size is known.
    pub fn go_to_page(&self, page: i64) -> Self {
        let page = if page < 1 { 1 } else { page as usize };
        QueryState {
            page,
            ..self.clone()
        }
    }

    /// Moves forward only when `last` reports a next page.
    pub fn next_page(&self, last: &PageInfo) -> Self {
        if last.has_next_page {
            QueryState {
                page: last.page + 1,
                ..self.clone()
            }
        } else {
            QueryState {
                page: last.page,
                ..self.clone()
            }
        }
    }

    pub fn previous_page(&self, last: &PageInfo) -> Self {
        if last.has_previous_page {
            QueryState {
                page: last.page - 1,
                ..self.clone()
            }
        } else {
            QueryState {
                page: last.page,
                ..self.clone()
            }
        }
    }

    /// Clears search, filter, sort, and page in one step.
    pub fn reset(&self) -> Self {
        QueryState::default()
    }

    pub fn is_default(&self) -> bool {
        self == &QueryState::default()
    }
}
