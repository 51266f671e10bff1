//! Error types for data operations.
//!
//! This module defines [`DataError`] which covers all error cases that can occur
//! when fetching season data or reading and writing the on-disk cache.

use thiserror::Error;

use crate::types::Season;

/// Errors that can occur during data operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The remote source could not deliver usable data for a season.
    #[error("Failed to fetch season {season}: {message}")]
    Fetch {
        /// The season that was requested.
        season: Season,
        /// What went wrong.
        message: String,
    },

    /// A cached table could not be read, usually because the file is missing
    /// even though the completeness metadata lists the season.
    #[error("Cache read error at {path}: {message}")]
    CacheRead {
        /// Path of the file that could not be read.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// A table, metadata or reference-date file could not be persisted.
    #[error("Cache write error at {path}: {message}")]
    CacheWrite {
        /// Path of the file that could not be written.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// Error parsing data from a provider or from a cache file.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

impl DataError {
    /// Builds a [`DataError::CacheRead`] for `path`.
    pub fn cache_read(path: impl AsRef<std::path::Path>, message: impl ToString) -> Self {
        Self::CacheRead {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Builds a [`DataError::CacheWrite`] for `path`.
    pub fn cache_write(path: impl AsRef<std::path::Path>, message: impl ToString) -> Self {
        Self::CacheWrite {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Returns true if this error came from the on-disk cache rather than the
    /// remote source.
    #[must_use]
    pub const fn is_cache_error(&self) -> bool {
        matches!(self, Self::CacheRead { .. } | Self::CacheWrite { .. })
    }
}

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;
