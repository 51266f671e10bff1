//! Provider traits for fetching season data from a remote source.
//!
//! This module defines the core provider traits:
//!
//! - [`DataProvider`] - Base trait for all data providers
//! - [`SeasonDataProvider`] - Season-scoped play-by-play and schedule tables

use async_trait::async_trait;
use polars::prelude::DataFrame;
use std::fmt::Debug;

use crate::{error::Result, kind::DatasetKind, types::Season};

/// Base trait for all data providers.
///
/// All data providers must implement this trait to provide basic metadata
/// about the provider and its capabilities.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "nflverse").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Provider for season-scoped tables.
///
/// Implementations are expected to return whatever games have been played so
/// far for a season that is still in progress. Retries, if any, belong here
/// and not in the caching layer.
#[async_trait]
pub trait SeasonDataProvider: DataProvider {
    /// Fetches play-by-play data for one season.
    ///
    /// The returned DataFrame must carry a `game_date` column.
    async fn fetch_play_by_play(&self, season: Season) -> Result<DataFrame>;

    /// Fetches the game schedule for one season.
    ///
    /// The returned DataFrame must carry a `gameday` column and, for the
    /// championship game to be recognised, a `game_type` column.
    async fn fetch_schedule(&self, season: Season) -> Result<DataFrame>;

    /// Fetches one season of the given dataset kind.
    async fn fetch(&self, kind: DatasetKind, season: Season) -> Result<DataFrame> {
        match kind {
            DatasetKind::PlayByPlay => self.fetch_play_by_play(season).await,
            DatasetKind::Schedule => self.fetch_schedule(season).await,
        }
    }
}
