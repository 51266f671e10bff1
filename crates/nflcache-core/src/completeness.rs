//! Season completeness detection.
//!
//! A season is considered complete once its table contains at least one row
//! dated on a known reference date (the championship game). A single match is
//! sufficient; the number of matching rows does not matter beyond that.

use chrono::NaiveDate;
use polars::prelude::{DataFrame, DataType};
use std::path::Path;

use crate::{error::Result, kind::DatasetKind, types::ReferenceDates};

/// Days between 0001-01-01 (CE day 1) and the Unix epoch used by polars dates.
const UNIX_EPOCH_CE_DAYS: i32 = 719_163;

/// What to do with a freshly fetched season table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheAction {
    /// Return the table without caching it or recording it in metadata.
    Skip,
    /// Write the table to the season cache and record `complete` in metadata.
    Store {
        /// Completeness value to record.
        complete: bool,
    },
}

/// Per-kind decision table for the retrieval loop.
///
/// Each dataset kind owns its rules for when a cached season may be reused and
/// what to persist after a fetch, so the shared loop never branches on kind.
pub trait CompletenessPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the dataset kind this policy governs.
    fn kind(&self) -> DatasetKind;

    /// Returns true if a season recorded as `recorded` should be served from
    /// the season cache instead of being fetched.
    fn use_cached(&self, recorded: bool) -> bool;

    /// Decides whether a freshly fetched table holds a concluded season.
    fn is_complete(&self, table: &DataFrame, cache_dir: &Path) -> Result<bool>;

    /// Decides what to persist for a freshly fetched table.
    fn on_fetched(&self, complete: bool) -> CacheAction;
}

/// Parses every value of `column` as a calendar date.
///
/// String, `Date` and `Datetime` columns are accepted. A missing column, an
/// uncastable column or unparsable values yield no dates rather than an error.
#[must_use]
pub fn column_dates(table: &DataFrame, column: &str) -> Vec<NaiveDate> {
    let Ok(values) = table.column(column) else {
        return Vec::new();
    };
    let Ok(values) = values.cast(&DataType::Date) else {
        return Vec::new();
    };
    let Ok(dates) = values.date() else {
        return Vec::new();
    };

    let physical = &dates.0;
    physical
        .into_iter()
        .flatten()
        .filter_map(|days| NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_CE_DAYS))
        .collect()
}

/// Counts rows of `column` whose date is a reference date.
#[must_use]
pub fn matching_rows(table: &DataFrame, column: &str, reference: &ReferenceDates) -> usize {
    column_dates(table, column)
        .iter()
        .filter(|date| reference.contains(date))
        .count()
}

/// Returns true if at least one row of `column` falls on a reference date.
#[must_use]
pub fn season_complete(table: &DataFrame, column: &str, reference: &ReferenceDates) -> bool {
    matching_rows(table, column, reference) > 0
}
