//! Completeness metadata storage.

use nflcache_core::{CompletenessMetadata, DataError, DatasetKind, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::fs::write_bytes_atomic;

/// JSON file store for [`CompletenessMetadata`], one file per dataset kind.
///
/// The mapping is read fresh on every [`load`](Self::load) and written in full
/// on every [`save`](Self::save); nothing is held in memory between calls.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    dir: PathBuf,
}

impl MetadataStore {
    /// Create a metadata store in `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the metadata file path for a dataset kind.
    #[must_use]
    pub fn path(&self, kind: DatasetKind) -> PathBuf {
        self.dir.join(kind.metadata_file_name())
    }

    /// Loads the metadata for a dataset kind.
    ///
    /// A missing file yields an empty mapping.
    ///
    /// # Errors
    /// Returns [`DataError::CacheRead`] if the file exists but cannot be read,
    /// or [`DataError::Parse`] if it is not valid metadata.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn load(&self, kind: DatasetKind) -> Result<CompletenessMetadata> {
        let path = self.path(kind);
        if !path.exists() {
            debug!("No metadata file yet");
            return Ok(CompletenessMetadata::new());
        }

        let contents =
            std::fs::read_to_string(&path).map_err(|e| DataError::cache_read(&path, e))?;
        let mdata: CompletenessMetadata = serde_json::from_str(&contents).map_err(|e| {
            DataError::Parse(format!("Invalid metadata file {}: {}", path.display(), e))
        })?;

        debug!(seasons = mdata.len(), "Loaded metadata");
        Ok(mdata)
    }

    /// Saves the full metadata mapping for a dataset kind.
    ///
    /// The file is staged and renamed into place so a torn write cannot
    /// corrupt previously recorded seasons.
    ///
    /// # Errors
    /// Returns [`DataError::CacheWrite`] if the file cannot be written.
    #[instrument(skip(self, metadata), fields(kind = %kind, seasons = metadata.len()))]
    pub fn save(&self, metadata: &CompletenessMetadata, kind: DatasetKind) -> Result<()> {
        let path = self.path(kind);
        let contents = serde_json::to_vec_pretty(metadata)
            .map_err(|e| DataError::cache_write(&path, e))?;
        write_bytes_atomic(&path, &contents)?;
        debug!("Saved metadata");
        Ok(())
    }
}
