//! FILENAME: core/stats-engine/src/aggregate.rs
//! PURPOSE: Generic reductions over any `Record` collection.
//! CONTEXT: Fields are addressed by schema name, so the same functions
//! serve role/status/department distributions for employees and status
//! counts for attendance.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use records::Record;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// 365-day year, the canonical tenure unit.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Calendar-month keyed series (`YYYY-MM` -> value). Keys sort
/// chronologically; months with no data are simply absent.
pub type MonthlySeries = BTreeMap<String, usize>;

// ============================================================================
// CATEGORY COUNTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Occurrence counts per distinct value, kept in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryCounts {
    entries: Vec<CategoryCount>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|&pos| self.entries[pos].count)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.label.as_str(), e.count))
    }

    /// The `n` largest categories; ties keep first-encountered order.
    pub fn top(&self, n: usize) -> Vec<CategoryCount> {
        let mut ranked = self.entries.clone();
        // Stable: equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    pub fn to_map(&self) -> BTreeMap<String, usize> {
        self.iter().map(|(label, count)| (label.to_string(), count)).collect()
    }
}

/// Counts each distinct value of `field`. Missing values are not a category.
pub fn count_by_field<R: Record>(records: &[R], field: &str) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for record in records {
        if let Some(key) = record.value(field).category_key() {
            counts.increment(&key);
        }
    }
    counts
}

/// The `n` most frequent values of `field` as `(label, count)` pairs.
pub fn top_n<R: Record>(records: &[R], field: &str, n: usize) -> Vec<(String, usize)> {
    count_by_field(records, field)
        .top(n)
        .into_iter()
        .map(|c| (c.label, c.count))
        .collect()
}

// ============================================================================
// GROWTH
// ============================================================================

pub fn month_key(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m").to_string()
}

/// New records per calendar month of `date_field`. Records without a date
/// value are skipped.
pub fn monthly_counts<R: Record>(records: &[R], date_field: &str) -> MonthlySeries {
    let mut series = MonthlySeries::new();
    for record in records {
        if let Some(date) = record.value(date_field).as_date() {
            *series.entry(month_key(&date)).or_insert(0) += 1;
        }
    }
    series
}

/// Running total of records created in or before each month that has at
/// least one record.
pub fn cumulative_growth<R: Record>(records: &[R], date_field: &str) -> MonthlySeries {
    let mut dates: Vec<DateTime<Utc>> = records
        .iter()
        .filter_map(|r| r.value(date_field).as_date())
        .collect();
    dates.sort();

    let mut series = MonthlySeries::new();
    for (seen, date) in dates.iter().enumerate() {
        series.insert(month_key(date), seen + 1);
    }
    series
}

/// Change between the last two months of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthChange {
    pub latest_month: Option<String>,
    pub previous_month: Option<String>,
    pub latest: usize,
    pub previous: usize,
    pub delta: i64,
    /// `None` when the previous value is zero.
    pub percent_change: Option<f64>,
}

/// Compares the last entry of `series` with the one before it. A series
/// with fewer than two entries treats the missing side as zero.
pub fn month_over_month_growth(series: &MonthlySeries) -> GrowthChange {
    let mut tail = series.iter().rev();
    let latest = tail.next();
    let previous = tail.next();

    let latest_value = latest.map_or(0, |(_, v)| *v);
    let previous_value = previous.map_or(0, |(_, v)| *v);
    let delta = latest_value as i64 - previous_value as i64;
    let percent_change = if previous_value > 0 {
        Some(delta as f64 / previous_value as f64 * 100.0)
    } else {
        None
    };

    GrowthChange {
        latest_month: latest.map(|(k, _)| k.clone()),
        previous_month: previous.map(|(k, _)| k.clone()),
        latest: latest_value,
        previous: previous_value,
        delta,
        percent_change,
    }
}

// ============================================================================
// TENURE
// ============================================================================

/// Mean years between `date_field` and `as_of`. Records without a date do
/// not participate; an empty collection yields `0.0`.
pub fn average_tenure<R: Record>(records: &[R], date_field: &str, as_of: DateTime<Utc>) -> f64 {
    let mut total_years = 0.0;
    let mut counted = 0usize;
    for record in records {
        if let Some(date) = record.value(date_field).as_date() {
            total_years += (as_of - date).num_seconds() as f64 / SECONDS_PER_YEAR;
            counted += 1;
        }
    }
    if counted == 0 {
        0.0
    } else {
        total_years / counted as f64
    }
}

/// `count / total * 100`, or `0.0` when `total` is zero.
pub fn share_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
