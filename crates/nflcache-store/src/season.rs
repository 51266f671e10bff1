//! Per-season table storage.

use nflcache_core::{DataError, DatasetKind, Result, Season, TableFormat};
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::fs::write_atomic;
use crate::parquet::ParquetFormat;

/// On-disk store holding one table file per (dataset kind, season).
///
/// Files are named `<prefix>_<season>.<extension>`, e.g. `pbp_2022.parquet`,
/// so every pair maps to a distinct file within the cache directory.
#[derive(Debug, Clone)]
pub struct SeasonStore {
    dir: PathBuf,
    format: Arc<dyn TableFormat>,
}

impl SeasonStore {
    /// Create a store in `dir` using the Parquet format.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_format(dir, Arc::new(ParquetFormat::new()))
    }

    /// Create a store in `dir` using a custom table format.
    #[must_use]
    pub fn with_format(dir: impl Into<PathBuf>, format: Arc<dyn TableFormat>) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path of a season's table.
    #[must_use]
    pub fn path(&self, kind: DatasetKind, season: Season) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.{}",
            kind.file_prefix(),
            season,
            self.format.extension()
        ))
    }

    /// Returns true if a table file exists for the season.
    #[must_use]
    pub fn contains(&self, kind: DatasetKind, season: Season) -> bool {
        self.path(kind, season).is_file()
    }

    /// Reads a cached season table.
    ///
    /// # Errors
    /// Returns [`DataError::CacheRead`] if the file does not exist or cannot be
    /// decoded.
    #[instrument(skip(self), fields(kind = %kind, season = %season))]
    pub fn read(&self, kind: DatasetKind, season: Season) -> Result<DataFrame> {
        let path = self.path(kind, season);
        if !path.is_file() {
            return Err(DataError::cache_read(&path, "not found"));
        }
        let df = self.format.read(&path)?;
        debug!(rows = df.height(), "Cache hit for season table");
        Ok(df)
    }

    /// Writes a season table, replacing any previous copy.
    ///
    /// The cache directory is created if absent.
    ///
    /// # Errors
    /// Returns [`DataError::CacheWrite`] if the table cannot be persisted.
    #[instrument(skip(self, table), fields(kind = %kind, season = %season, rows = table.height()))]
    pub fn write(&self, table: &DataFrame, kind: DatasetKind, season: Season) -> Result<()> {
        let path = self.path(kind, season);
        write_atomic(&path, |staging| self.format.write(table, staging))?;
        debug!(path = %path.display(), "Cached season table");
        Ok(())
    }
}
