//! Parquet table format.

use nflcache_core::{DataError, Result, TableFormat};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::{debug, instrument};

/// Stores tables as Parquet files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParquetFormat;

impl ParquetFormat {
    /// Create a new Parquet format.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TableFormat for ParquetFormat {
    fn extension(&self) -> &str {
        "parquet"
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn read(&self, path: &Path) -> Result<DataFrame> {
        let file = File::open(path).map_err(|e| DataError::cache_read(path, e))?;
        let df = ParquetReader::new(file)
            .finish()
            .map_err(|e| DataError::cache_read(path, e))?;
        debug!("Read {} rows", df.height());
        Ok(df)
    }

    #[instrument(skip(self, table), fields(path = %path.display(), rows = table.height()))]
    fn write(&self, table: &DataFrame, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|e| DataError::cache_write(path, e))?;
        let mut table = table.clone();
        ParquetWriter::new(&mut file)
            .finish(&mut table)
            .map_err(|e| DataError::cache_write(path, e))?;
        debug!("Wrote table");
        Ok(())
    }
}
