//! Table serialization trait.
//!
//! This module defines the [`TableFormat`] trait used by the season cache to
//! persist tables. The caching protocol does not depend on the on-disk format.

use polars::prelude::DataFrame;
use std::fmt::Debug;
use std::path::Path;

use crate::error::Result;

/// On-disk serialization format for cached tables.
///
/// Implementations report failures as [`DataError::CacheRead`] and
/// [`DataError::CacheWrite`].
///
/// [`DataError::CacheRead`]: crate::DataError::CacheRead
/// [`DataError::CacheWrite`]: crate::DataError::CacheWrite
pub trait TableFormat: Send + Sync + Debug {
    /// Returns the file extension used for this format, without the dot.
    fn extension(&self) -> &str;

    /// Reads a table from `path`.
    fn read(&self, path: &Path) -> Result<DataFrame>;

    /// Writes `table` to `path`, replacing any existing file.
    fn write(&self, table: &DataFrame, path: &Path) -> Result<()>;
}
