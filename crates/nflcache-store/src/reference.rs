//! Reference date registry for schedule completeness.
//!
//! Schedule completeness is judged against championship dates that are
//! themselves derived from schedule data. The registry breaks that cycle by
//! seeding itself from whatever schedule tables are at hand when it is loaded,
//! and persisting the accumulated set. Until a season's championship row has
//! been seen, that season is reported incomplete.

use nflcache_core::{DataError, ReferenceDates, Result, column_dates};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

use crate::fs::write_bytes_atomic;

/// File name of the persisted reference dates.
pub const REFERENCE_DATES_FILE: &str = "schedules_reference_dates.json";

/// Column identifying the type of a scheduled game.
const GAME_TYPE_COLUMN: &str = "game_type";

/// Game type of the championship game.
const CHAMPIONSHIP_GAME_TYPE: &str = "SB";

/// Column holding a scheduled game's date.
const GAMEDAY_COLUMN: &str = "gameday";

/// Collects the dates of every championship game in the given schedule tables.
///
/// Tables lacking a `game_type` or `gameday` column contribute nothing.
#[must_use]
pub fn derive_reference_dates(tables: &[DataFrame]) -> ReferenceDates {
    let mut dates = ReferenceDates::new();
    for table in tables {
        let championships = table
            .clone()
            .lazy()
            .filter(col(GAME_TYPE_COLUMN).eq(lit(CHAMPIONSHIP_GAME_TYPE)))
            .select([col(GAMEDAY_COLUMN)])
            .collect();

        match championships {
            Ok(df) => {
                for date in column_dates(&df, GAMEDAY_COLUMN) {
                    dates.insert(date);
                }
            }
            Err(e) => trace!(error = %e, "Table has no championship rows"),
        }
    }
    dates
}

/// Persistent, append-only set of championship dates.
#[derive(Debug, Clone)]
pub struct ReferenceDateRegistry {
    dir: PathBuf,
}

impl ReferenceDateRegistry {
    /// Create a registry in `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the registry file path.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(REFERENCE_DATES_FILE)
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads the persisted dates, or an empty set if none were saved yet.
    ///
    /// # Errors
    /// Returns [`DataError::CacheRead`] or [`DataError::Parse`] if an existing
    /// file cannot be read.
    pub fn load(&self) -> Result<ReferenceDates> {
        let path = self.path();
        if !path.exists() {
            return Ok(ReferenceDates::new());
        }
        let contents =
            std::fs::read_to_string(&path).map_err(|e| DataError::cache_read(&path, e))?;
        serde_json::from_str(&contents).map_err(|e| {
            DataError::Parse(format!(
                "Invalid reference dates file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Persists the full set of dates.
    ///
    /// # Errors
    /// Returns [`DataError::CacheWrite`] if the file cannot be written.
    pub fn save(&self, dates: &ReferenceDates) -> Result<()> {
        let path = self.path();
        let contents =
            serde_json::to_vec_pretty(dates).map_err(|e| DataError::cache_write(&path, e))?;
        write_bytes_atomic(&path, &contents)
    }

    /// Loads the persisted dates and adds any championship dates found in
    /// `seed`, persisting the union if it grew.
    ///
    /// # Errors
    /// Propagates errors from [`load`](Self::load) and [`save`](Self::save).
    #[instrument(skip(self, seed), fields(dir = %self.dir.display(), seed_tables = seed.len()))]
    pub fn load_or_seed(&self, seed: &[DataFrame]) -> Result<ReferenceDates> {
        let mut dates = self.load()?;
        let added = dates.merge(&derive_reference_dates(seed));
        if added > 0 || !self.path().exists() {
            self.save(&dates)?;
            debug!(added, total = dates.len(), "Updated reference dates");
        } else {
            trace!(total = dates.len(), "Reference dates unchanged");
        }
        Ok(dates)
    }
}
