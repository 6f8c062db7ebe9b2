//! FILENAME: core/query-engine/src/engine.rs
//! Query engine - search, filter, sort, and paginate a record snapshot.
//!
//! Algorithm (order matters for the counts, not just for speed):
//! 1. Keep records whose `name` or `email` contains the search text (case-folded)
//! 2. Keep records whose `role` equals the role filter
//! 3. Stable-sort by the requested column, if the record schema knows it
//! 4. Clamp the page into `[1, total_pages]`
//! 5. Slice the page out of the sorted sequence

use std::cmp::Ordering;

use records::{FieldValue, Record};

use crate::definition::{QueryState, SortDirection, SortSpec, TableConfig};
use crate::view::{PageInfo, QueryPage};

/// Fields the free-text search looks at.
pub const SEARCH_FIELDS: [&str; 2] = ["name", "email"];

/// Field the role filter compares against.
pub const ROLE_FIELD: &str = "role";

// ============================================================================
// FILTERING
// ============================================================================

/// Case-insensitive substring match on any search field.
/// Blank or whitespace-only search text matches every record.
pub fn matches_search<R: Record>(record: &R, search_text: &str) -> bool {
    if search_text.trim().is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    SEARCH_FIELDS.iter().any(|field| {
        record
            .value(field)
            .as_text()
            .map_or(false, |text| text.to_lowercase().contains(&needle))
    })
}

// ============================================================================
// COMPARISON
// ============================================================================

/// Text ordering that behaves like a locale collation for plain labels:
/// case-insensitive first, then lowercase ahead of uppercase.
fn compare_text(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => b.cmp(a),
        other => other,
    }
}

/// Ascending comparison of two field values.
///
/// Values of different kinds, and missing values, compare equal so the
/// stable sort leaves them where they were. A field that mixes kinds across
/// records therefore has no meaningful order.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => compare_text(x, y),
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn sort_rows<R: Record>(rows: &mut [&R], sort: &SortSpec) {
    let column = sort.column.as_str();
    rows.sort_by(|a, b| {
        let ord = compare_values(&a.value(column), &b.value(column));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

// ============================================================================
// QUERY
// ============================================================================

/// Runs one query over `records`. Never fails: an empty result is a
/// well-formed page with `filtered_count == 0`.
pub fn run_query<R: Record + Clone>(
    records: &[R],
    state: &QueryState,
    config: &TableConfig,
) -> QueryPage<R> {
    let mut filtered: Vec<&R> = records
        .iter()
        .filter(|r| matches_search(*r, &state.search_text))
        .filter(|r| state.role_filter.matches(r.value(ROLE_FIELD).as_text()))
        .collect();

    if let Some(sort) = &state.sort {
        // Unknown columns mean "no sort".
        if R::has_field(&sort.column) {
            sort_rows(&mut filtered, sort);
        }
    }

    let info = PageInfo::new(
        state.page,
        config.effective_page_size(),
        filtered.len(),
        records.len(),
    );
    let (start, end) = info.slice_bounds();
    let rows = filtered[start..end].iter().map(|r| (*r).clone()).collect();

    QueryPage { rows, info }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{RoleFilter, SortSpec};
    use chrono::{Duration, TimeZone, Utc};
    use records::{Employee, RecordId, Role};

    fn employee(id: u64, name: &str, email: &str, role: Role) -> Employee {
        Employee {
            id: RecordId::Number(id),
            name: name.to_string(),
            email: email.to_string(),
            role,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::days(id as i64),
            department: None,
            status: None,
        }
    }

    fn roster(count: u64) -> Vec<Employee> {
        (1..=count)
            .map(|i| employee(i, &format!("Person {:02}", i), &format!("p{}@x.com", i), Role::User))
            .collect()
    }

    fn ids(page: &QueryPage<Employee>) -> Vec<u64> {
        page.rows.iter().filter_map(|e| e.id.as_number()).collect()
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let records = vec![
            employee(1, "Ann", "a@x.com", Role::User),
            employee(2, "Bo", "b@x.com", Role::Admin),
        ];
        let state = QueryState::new().with_search("an");
        let page = run_query(&records, &state, &TableConfig::default());
        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.info.filtered_count, 1);
        assert_eq!(page.info.total_count, 2);
    }

    #[test]
    fn test_search_matches_email() {
        let records = vec![
            employee(1, "Ann", "ann@corp.com", Role::User),
            employee(2, "Bo", "bo@home.org", Role::User),
        ];
        let state = QueryState::new().with_search("HOME");
        assert_eq!(ids(&run_query(&records, &state, &TableConfig::default())), vec![2]);
    }

    #[test]
    fn test_whitespace_search_matches_all() {
        let records = roster(3);
        let state = QueryState::new().with_search("   ");
        assert_eq!(run_query(&records, &state, &TableConfig::default()).info.filtered_count, 3);
    }

    #[test]
    fn test_role_filter_after_search() {
        let records = vec![
            employee(1, "Ann", "a@x.com", Role::User),
            employee(2, "Anders", "b@x.com", Role::Admin),
            employee(3, "Cy", "c@x.com", Role::Admin),
        ];
        let state = QueryState::new()
            .with_search("an")
            .with_role_filter(RoleFilter::Only(Role::Admin));
        let page = run_query(&records, &state, &TableConfig::default());
        assert_eq!(ids(&page), vec![2]);
        assert_eq!(page.info.filtered_count, 1);
    }

    #[test]
    fn test_second_page_of_twelve() {
        let records = roster(12);
        let state = QueryState::new().go_to_page(2);
        let page = run_query(&records, &state, &TableConfig::new(10));
        assert_eq!(ids(&page), vec![11, 12]);
        assert_eq!(page.info.total_pages, 2);
        assert!(!page.info.has_next_page);
        assert!(page.info.has_previous_page);
    }

    #[test]
    fn test_page_beyond_end_is_clamped() {
        let records = roster(12);
        let state = QueryState::new().go_to_page(99);
        let page = run_query(&records, &state, &TableConfig::new(5));
        assert_eq!(page.info.page, 3);
        assert_eq!(ids(&page), vec![11, 12]);
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<Employee> = Vec::new();
        let page = run_query(&records, &QueryState::new().go_to_page(4), &TableConfig::default());
        assert!(page.is_empty());
        assert_eq!(page.info.filtered_count, 0);
        assert_eq!(page.info.total_pages, 1);
        assert_eq!(page.info.page, 1);
    }

    #[test]
    fn test_sort_created_at_toggle_reverses() {
        let mut records = roster(6);
        records.reverse();
        let asc_state = QueryState::new().toggle_sort("createdAt");
        let asc = run_query(&records, &asc_state, &TableConfig::default());
        assert_eq!(ids(&asc), vec![1, 2, 3, 4, 5, 6]);

        let desc = run_query(&records, &asc_state.toggle_sort("createdAt"), &TableConfig::default());
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let records = vec![
            employee(1, "Zed", "z@x.com", Role::User),
            employee(2, "Amy", "a@x.com", Role::Admin),
            employee(3, "Max", "m@x.com", Role::User),
            employee(4, "Bea", "b@x.com", Role::Admin),
        ];
        let asc = run_query(&records, &QueryState::new().toggle_sort("role"), &TableConfig::default());
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);
        let desc = run_query(
            &records,
            &QueryState::new().toggle_sort("role").toggle_sort("role"),
            &TableConfig::default(),
        );
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let records = vec![
            employee(1, "bob", "1@x.com", Role::User),
            employee(2, "Alice", "2@x.com", Role::User),
            employee(3, "carl", "3@x.com", Role::User),
        ];
        let page = run_query(&records, &QueryState::new().toggle_sort("name"), &TableConfig::default());
        assert_eq!(ids(&page), vec![2, 1, 3]);
    }

    #[test]
    fn test_numeric_id_sort() {
        let records = vec![
            employee(10, "A", "a@x.com", Role::User),
            employee(9, "B", "b@x.com", Role::User),
            employee(100, "C", "c@x.com", Role::User),
        ];
        let page = run_query(&records, &QueryState::new().toggle_sort("id"), &TableConfig::default());
        assert_eq!(ids(&page), vec![9, 10, 100]);
    }

    #[test]
    fn test_unknown_sort_column_keeps_input_order() {
        let records = vec![
            employee(3, "C", "c@x.com", Role::User),
            employee(1, "A", "a@x.com", Role::User),
        ];
        let state = QueryState {
            sort: Some(SortSpec::descending("salary")),
            ..QueryState::default()
        };
        assert_eq!(ids(&run_query(&records, &state, &TableConfig::default())), vec![3, 1]);
    }

    #[test]
    fn test_missing_values_compare_equal() {
        let mut records = roster(3);
        records[1].department = Some("Sales".to_string());
        let page = run_query(&records, &QueryState::new().toggle_sort("department"), &TableConfig::default());
        assert_eq!(ids(&page), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_kinds_compare_equal() {
        assert_eq!(
            compare_values(&FieldValue::Text("a"), &FieldValue::Number(1.0)),
            Ordering::Equal
        );
        assert_eq!(compare_values(&FieldValue::Text("a"), &FieldValue::Text("A")), Ordering::Less);
    }

    #[test]
    fn test_reset_reproduces_first_unsorted_page() {
        let mut records = roster(15);
        records.swap(0, 7);
        let state = QueryState::new()
            .with_search("person 1")
            .toggle_sort("name")
            .toggle_sort("name")
            .go_to_page(2);
        let baseline = run_query(&records, &QueryState::default(), &TableConfig::default());
        let reset = run_query(&records, &state.reset(), &TableConfig::default());
        assert_eq!(reset, baseline);
        assert_eq!(reset.rows[..], records[..10]);
    }

    #[test]
    fn test_query_is_deterministic() {
        let records = roster(23);
        let state = QueryState::new().with_search("person").toggle_sort("email").go_to_page(2);
        let config = TableConfig::new(7);
        assert_eq!(run_query(&records, &state, &config), run_query(&records, &state, &config));
    }

    #[test]
    fn test_page_length_bounds() {
        let records = roster(23);
        let config = TableConfig::new(7);
        for page in 1..=4 {
            let result = run_query(&records, &QueryState::new().go_to_page(page), &config);
            assert!(result.len() <= 7);
            assert!(result.info.filtered_count <= result.info.total_count);
            if result.info.has_next_page {
                assert_eq!(result.len(), 7);
            }
        }
    }

    #[test]
    fn test_max_page_size_returns_everything() {
        let records = roster(5);
        let state = QueryState::new().go_to_page(3);
        let page = run_query(&records, &state, &TableConfig::new(usize::MAX));
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
        assert_eq!(page.info.page, 1);
        assert_eq!(page.info.total_pages, 1);
    }
}
