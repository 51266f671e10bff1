//! Dataset kind definitions.
//!
//! This module defines [`DatasetKind`], which selects the date column used for
//! completeness detection and the file-naming convention of each cache.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of season-scoped dataset being cached.
///
/// Each kind has a fully independent cache inside a cache directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Play-by-play events, one row per play.
    PlayByPlay,
    /// Game schedules and results, one row per game.
    Schedule,
}

impl DatasetKind {
    /// Returns the column holding each row's calendar date.
    #[must_use]
    pub const fn date_column(&self) -> &'static str {
        match self {
            Self::PlayByPlay => "game_date",
            Self::Schedule => "gameday",
        }
    }

    /// Returns the prefix used for this kind's cache files.
    #[must_use]
    pub const fn file_prefix(&self) -> &'static str {
        match self {
            Self::PlayByPlay => "pbp",
            Self::Schedule => "schedules",
        }
    }

    /// Returns the file name of this kind's completeness metadata.
    #[must_use]
    pub const fn metadata_file_name(&self) -> &'static str {
        match self {
            Self::PlayByPlay => "pbp_metadata.json",
            Self::Schedule => "schedules_metadata.json",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayByPlay => write!(f, "play-by-play"),
            Self::Schedule => write!(f, "schedule"),
        }
    }
}
