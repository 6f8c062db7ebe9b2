//! FILENAME: core/query-engine/src/table.rs
//! Stateful table wrapper.
//!
//! Holds a `TableConfig`, the current `QueryState`, and the pagination info
//! of the last query so next/previous can be answered without re-running.
//! The record snapshot is still passed in on every `query` call.

use records::Record;

use crate::definition::{QueryState, RoleFilter, TableConfig};
use crate::engine::run_query;
use crate::view::{PageInfo, QueryPage};

#[derive(Debug, Clone)]
pub struct TableQueryEngine {
    config: TableConfig,
    state: QueryState,
    last: Option<PageInfo>,
}

impl TableQueryEngine {
    pub fn new(config: TableConfig) -> Self {
        TableQueryEngine {
            config,
            state: QueryState::default(),
            last: None,
        }
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self::new(TableConfig::new(page_size))
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.state = self.state.with_search(text);
    }

    pub fn filter_role(&mut self, filter: RoleFilter) {
        self.state = self.state.with_role_filter(filter);
    }

    pub fn sort_by(&mut self, column: &str) {
        self.state = self.state.toggle_sort(column);
    }

    /// Clamps against the last known total when there is one.
    pub fn go_to_page(&mut self, page: i64) {
        let mut next = self.state.go_to_page(page);
        if let Some(last) = &self.last {
            next.page = next.page.min(last.total_pages);
        }
        self.state = next;
    }

    pub fn next_page(&mut self) {
        if let Some(last) = &self.last {
            self.state = self.state.next_page(last);
        }
    }

    pub fn previous_page(&mut self) {
        if let Some(last) = &self.last {
            self.state = self.state.previous_page(last);
        }
    }

    pub fn reset_filters(&mut self) {
        self.state = self.state.reset();
    }

    /// Runs the current state over `records`. The clamped page is written
    /// back so the stored state never points past the last page.
    pub fn query<R: Record + Clone>(&mut self, records: &[R]) -> QueryPage<R> {
        let page = run_query(records, &self.state, &self.config);
        self.state.page = page.info.page;
        self.last = Some(page.info);
        page
    }
}

impl Default for TableQueryEngine {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}
