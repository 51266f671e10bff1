//! Core data types for season-scoped caching.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Season`] - Integer season identifier
//! - [`CompletenessMetadata`] - Durable season to completeness mapping
//! - [`ReferenceDates`] - Set of known season-ending dates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// One competitive season, identified by the year it starts in.
///
/// The 2022 season's championship game is played in February 2023 but still
/// belongs to `Season(2022)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(i32);

impl Season {
    /// Creates a new season.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// Returns the season's year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i32> for Season {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

/// Durable mapping from season to completeness, one per dataset kind and
/// cache directory.
///
/// A season recorded `true` is permanently complete. A season recorded
/// `false` was incomplete when it was last fetched. An absent season has never
/// been fetched into this cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletenessMetadata {
    seasons: BTreeMap<Season, bool>,
}

impl CompletenessMetadata {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded completeness of a season, if any.
    #[must_use]
    pub fn get(&self, season: Season) -> Option<bool> {
        self.seasons.get(&season).copied()
    }

    /// Returns true if the season has been recorded at all.
    #[must_use]
    pub fn contains(&self, season: Season) -> bool {
        self.seasons.contains_key(&season)
    }

    /// Records a season's completeness, returning the previous value.
    pub fn record(&mut self, season: Season, complete: bool) -> Option<bool> {
        self.seasons.insert(season, complete)
    }

    /// Returns the number of recorded seasons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    /// Returns true if no season has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    /// Returns an iterator over recorded seasons in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Season, bool)> + '_ {
        self.seasons.iter().map(|(s, c)| (*s, *c))
    }

    /// Returns the seasons recorded as incomplete.
    #[must_use]
    pub fn incomplete_seasons(&self) -> Vec<Season> {
        self.iter().filter(|(_, c)| !c).map(|(s, _)| s).collect()
    }
}

impl FromIterator<(Season, bool)> for CompletenessMetadata {
    fn from_iter<I: IntoIterator<Item = (Season, bool)>>(iter: I) -> Self {
        Self {
            seasons: iter.into_iter().collect(),
        }
    }
}

/// Set of calendar dates known to mark the end of a season.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceDates {
    dates: BTreeSet<NaiveDate>,
}

impl ReferenceDates {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `date` is a known reference date.
    #[must_use]
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    /// Adds a date, returning true if it was not already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Adds every date from `other`, returning how many were new.
    pub fn merge(&mut self, other: &Self) -> usize {
        let before = self.dates.len();
        self.dates.extend(other.dates.iter().copied());
        self.dates.len() - before
    }

    /// Returns the number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns an iterator over the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl FromIterator<NaiveDate> for ReferenceDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
