//! FILENAME: core/query-engine/src/view.rs
//! Query view - the computed page handed to the view layer.

use serde::{Deserialize, Serialize};

/// Counts and flags that drive pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Clamped page actually returned (1-based).
    pub page: usize,
    pub page_size: usize,
    /// Always at least 1, even for an empty result.
    pub total_pages: usize,
    /// Size after search and role filtering.
    pub filtered_count: usize,
    /// Size of the unfiltered input.
    pub total_count: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, filtered_count: usize, total_count: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages_for(filtered_count, page_size);
        let page = page.clamp(1, total_pages);
        PageInfo {
            page,
            page_size,
            total_pages,
            filtered_count,
            total_count,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    /// Index range of this page within the filtered, sorted sequence.
    pub fn slice_bounds(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.filtered_count);
        (start.min(end), end)
    }

    /// 1-based inclusive item numbers for a "Showing x to y of z" label.
    /// `None` when there is nothing to show.
    pub fn page_range(&self) -> Option<(usize, usize)> {
        let (start, end) = self.slice_bounds();
        if start == end {
            None
        } else {
            Some((start + 1, end))
        }
    }
}

/// `max(1, ceil(count / page_size))`.
pub fn total_pages_for(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// One page of rows plus its pagination info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<R> {
    pub rows: Vec<R>,
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<R> QueryPage<R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn map_rows<T, F: FnMut(R) -> T>(self, f: F) -> QueryPage<T> {
        QueryPage {
            rows: self.rows.into_iter().map(f).collect(),
            info: self.info,
        }
    }
}
