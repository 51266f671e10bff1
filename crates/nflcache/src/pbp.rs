//! Play-by-play retrieval.

use std::path::Path;
use std::sync::Arc;

use nflcache_core::{Result, Season, SeasonDataProvider, TableFormat};
use polars::prelude::DataFrame;

use crate::policy::PlayByPlayPolicy;
use crate::retriever::SeasonRetriever;

/// Retrieves play-by-play data, caching seasons once they are complete.
///
/// A season counts as complete once its data contains a play on that
/// season's championship date. Complete seasons are written to the cache and
/// never fetched again; incomplete seasons are never cached.
///
/// # Example
///
/// ```rust,ignore
/// use nflcache::{PlayByPlay, Season};
/// use std::path::Path;
///
/// let pbp = PlayByPlay::nflverse();
/// let df = pbp
///     .get(&[Season::new(2022), Season::new(2023)], Some(Path::new("cache/")))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlayByPlay {
    retriever: SeasonRetriever,
    policy: PlayByPlayPolicy,
}

impl PlayByPlay {
    /// Create a play-by-play retriever backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn SeasonDataProvider>) -> Self {
        Self {
            retriever: SeasonRetriever::new(provider),
            policy: PlayByPlayPolicy::new(),
        }
    }

    /// Create a play-by-play retriever backed by nflverse.
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

    /// Set the completeness policy, e.g. to supply extra championship dates.
    #[must_use]
    pub fn with_policy(mut self, policy: PlayByPlayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the name of the underlying provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.retriever.provider().name()
    }

    /// Get play-by-play data for the given seasons, in the order given.
    ///
    /// Without `cache_dir` every season is fetched and nothing is written.
    /// With it, seasons recorded complete are read from the cache and newly
    /// complete seasons are cached.
    ///
    /// # Errors
    /// Returns the first fetch, cache read or cache write error encountered;
    /// no partial result is returned.
    pub async fn get(&self, seasons: &[Season], cache_dir: Option<&Path>) -> Result<DataFrame> {
        self.retriever
            .retrieve(&self.policy, seasons, cache_dir)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockProvider, pbp_table, seasons_of};
    use nflcache_core::{DataError, DatasetKind};
    use nflcache_store::{MetadataStore, SeasonStore};

    fn seasons(years: &[i32]) -> Vec<Season> {
        years.iter().copied().map(Season::new).collect()
    }

    #[tokio::test]
    async fn test_without_cache_always_fetches() {
        let provider = Arc::new(MockProvider::new());
        provider.set_pbp(1999, pbp_table(1999, &["2000-01-30"]));
        let pbp = PlayByPlay::new(provider.clone());

        pbp.get(&seasons(&[1999]), None).await.unwrap();
        pbp.get(&seasons(&[1999]), None).await.unwrap();

        assert_eq!(provider.pbp_fetches(), 2);
        assert_eq!(pbp.provider_name(), "mock");
    }

    #[tokio::test]
    async fn test_complete_season_is_cached_once() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(MockProvider::new());
        provider.set_pbp(1999, pbp_table(1999, &["1999-09-12", "2000-01-30"]));
        let pbp = PlayByPlay::new(provider.clone());

        let first = pbp.get(&seasons(&[1999]), Some(dir.path())).await.unwrap();
        assert_eq!(provider.pbp_fetches(), 1);

        let mdata = MetadataStore::new(dir.path())
            .load(DatasetKind::PlayByPlay)
            .unwrap();
        assert_eq!(mdata.get(Season::new(1999)), Some(true));
        assert_eq!(mdata.len(), 1);

        let second = pbp.get(&seasons(&[1999]), Some(dir.path())).await.unwrap();
        assert_eq!(provider.pbp_fetches(), 1);
        assert!(first.equals(&second));
    }

    #[tokio::test]
    async fn test_incomplete_season_is_never_cached() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(MockProvider::new());
        provider.set_pbp(2024, pbp_table(2024, &["2024-09-05", "2024-09-08"]));
        let pbp = PlayByPlay::new(provider.clone());

        pbp.get(&seasons(&[2024]), Some(dir.path())).await.unwrap();
        pbp.get(&seasons(&[2024]), Some(dir.path())).await.unwrap();

        assert_eq!(provider.pbp_fetches(), 2);
        let mdata = MetadataStore::new(dir.path())
            .load(DatasetKind::PlayByPlay)
            .unwrap();
        assert!(mdata.is_empty());
        assert!(!SeasonStore::new(dir.path()).contains(DatasetKind::PlayByPlay, Season::new(2024)));
    }

    #[tokio::test]
    async fn test_preserves_requested_order() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(MockProvider::new());
        provider.set_pbp(2020, pbp_table(2020, &["2020-09-10", "2021-02-07"]));
        provider.set_pbp(2021, pbp_table(2021, &["2021-09-09", "2022-02-13"]));
        let pbp = PlayByPlay::new(provider.clone());

        let fetched = pbp
            .get(&seasons(&[2021, 2020]), Some(dir.path()))
            .await
            .unwrap();
        assert_eq!(seasons_of(&fetched), vec![2021, 2021, 2020, 2020]);

        // Mixed: one from cache, one fetched, still in requested order.
        provider.set_pbp(2024, pbp_table(2024, &["2024-09-05"]));
        let mixed = pbp
            .get(&seasons(&[2024, 2020]), Some(dir.path()))
            .await
            .unwrap();
        assert_eq!(seasons_of(&mixed), vec![2024, 2020, 2020]);
        assert_eq!(provider.pbp_fetches(), 3);
    }

    #[tokio::test]
    async fn test_empty_request() {
        let provider = Arc::new(MockProvider::new());
        let pbp = PlayByPlay::new(provider.clone());

        let df = pbp.get(&[], None).await.unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(provider.pbp_fetches(), 0);
    }

    #[tokio::test]
    async fn test_fetch_error_aborts_but_keeps_resolved_seasons() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(MockProvider::new());
        provider.set_pbp(1999, pbp_table(1999, &["2000-01-30"]));
        let pbp = PlayByPlay::new(provider.clone());

        let result = pbp.get(&seasons(&[1999, 2000, 2001]), Some(dir.path())).await;
        assert!(matches!(result, Err(DataError::Fetch { .. })));
        // 2001 was never attempted.
        assert_eq!(provider.pbp_fetches(), 2);

        let mdata = MetadataStore::new(dir.path())
            .load(DatasetKind::PlayByPlay)
            .unwrap();
        assert_eq!(mdata.get(Season::new(1999)), Some(true));
    }

    #[tokio::test]
    async fn test_missing_cache_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(MockProvider::new());
        provider.set_pbp(1999, pbp_table(1999, &["2000-01-30"]));
        let pbp = PlayByPlay::new(provider.clone());

        pbp.get(&seasons(&[1999]), Some(dir.path())).await.unwrap();
        let store = SeasonStore::new(dir.path());
        std::fs::remove_file(store.path(DatasetKind::PlayByPlay, Season::new(1999))).unwrap();

        let result = pbp.get(&seasons(&[1999]), Some(dir.path())).await;
        assert!(matches!(result, Err(DataError::CacheRead { .. })));
        assert_eq!(provider.pbp_fetches(), 1);
    }

    #[tokio::test]
    async fn test_cache_write_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("occupied");
        std::fs::write(&not_a_dir, b"").unwrap();

        let provider = Arc::new(MockProvider::new());
        provider.set_pbp(1999, pbp_table(1999, &["2000-01-30"]));
        let pbp = PlayByPlay::new(provider.clone());

        let result = pbp.get(&seasons(&[1999]), Some(&not_a_dir)).await;
        assert!(matches!(result, Err(DataError::CacheWrite { .. })));
    }
}
