//! Schedule retrieval.

use std::path::Path;
use std::sync::Arc;

use nflcache_core::{Result, Season, SeasonDataProvider, TableFormat};
use polars::prelude::DataFrame;

use crate::policy::SchedulePolicy;
use crate::retriever::SeasonRetriever;

/// Retrieves game schedules, caching every fetched season.
///
/// Each cached season is recorded complete or incomplete. Incomplete seasons
/// are served stale from the cache unless `update_last_season` is set, in
/// which case they are fetched again (e.g. after another week is played).
/// Complete seasons are never fetched again.
///
/// The championship dates used to judge completeness are accumulated from the
/// schedules themselves, so the newest season is reported complete only once
/// its championship game appears in the fetched data.
#[derive(Debug, Clone)]
pub struct Schedules {
    retriever: SeasonRetriever,
}

impl Schedules {
    /// Create a schedule retriever backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn SeasonDataProvider>) -> Self {
        Self {
            retriever: SeasonRetriever::new(provider),
        }
    }

    /// Create a schedule retriever backed by nflverse.
    #[cfg(feature = "nflverse")]
    #[must_use]
    pub fn nflverse() -> Self {
        Self::new(Arc::new(nflcache_nflverse::NflverseProvider::new()))
    }

    /// Set the on-disk table format (Parquet by default).
    #[must_use]
    pub fn with_format(mut self, format: Arc<dyn TableFormat>) -> Self {
        self.retriever.set_format(format);
        self
    }

    /// Returns the name of the underlying provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.retriever.provider().name()
    }

    /// Get schedule data for the given seasons, in the order given.
    ///
    /// Without `cache_dir` every season is fetched and nothing is written.
    ///
    /// # Errors
    /// Returns the first fetch, cache read or cache write error encountered;
    /// no partial result is returned.
    pub async fn get(
        &self,
        seasons: &[Season],
        cache_dir: Option<&Path>,
        update_last_season: bool,
    ) -> Result<DataFrame> {
        let policy = SchedulePolicy::new(update_last_season);
        self.retriever.retrieve(&policy, seasons, cache_dir).await
    }
}
