//! Season-by-season retrieval loop shared by the dataset orchestrators.

use std::path::Path;
use std::sync::Arc;

use nflcache_core::{
    CacheAction, CompletenessPolicy, DataError, Result, Season, SeasonDataProvider, TableFormat,
};
use nflcache_store::{MetadataStore, ParquetFormat, SeasonStore};
use polars::prelude::*;
use tracing::{debug, info, instrument};

/// Fetches seasons from a provider, consulting and maintaining the cache
/// according to a [`CompletenessPolicy`].
#[derive(Debug, Clone)]
pub(crate) struct SeasonRetriever {
    provider: Arc<dyn SeasonDataProvider>,
    format: Arc<dyn TableFormat>,
}

impl SeasonRetriever {
    pub(crate) fn new(provider: Arc<dyn SeasonDataProvider>) -> Self {
        Self {
            provider,
            format: Arc::new(ParquetFormat::new()),
        }
    }

    pub(crate) fn set_format(&mut self, format: Arc<dyn TableFormat>) {
        self.format = format;
    }

    pub(crate) fn provider(&self) -> &dyn SeasonDataProvider {
        self.provider.as_ref()
    }

    /// Retrieves every season in order and concatenates the results.
    ///
    /// Seasons are processed strictly one after another. The first error
    /// aborts the whole request; seasons resolved before it stay cached.
    #[instrument(skip(self, policy), fields(kind = %policy.kind(), provider = self.provider.name()))]
    pub(crate) async fn retrieve(
        &self,
        policy: &dyn CompletenessPolicy,
        seasons: &[Season],
        cache_dir: Option<&Path>,
    ) -> Result<DataFrame> {
        let kind = policy.kind();
        let mut frames = Vec::with_capacity(seasons.len());

        let Some(dir) = cache_dir else {
            for &season in seasons {
                debug!(season = %season, "Fetching without cache");
                frames.push(self.provider.fetch(kind, season).await?);
            }
            return concat_seasons(frames);
        };

        let store = SeasonStore::with_format(dir, Arc::clone(&self.format));
        let metadata_store = MetadataStore::new(dir);
        let mut metadata = metadata_store.load(kind)?;

        for &season in seasons {
            let recorded = metadata.get(season);
            if recorded.is_some_and(|complete| policy.use_cached(complete)) {
                debug!(season = %season, complete = ?recorded, "Serving season from cache");
                frames.push(store.read(kind, season)?);
                continue;
            }

            debug!(season = %season, recorded = ?recorded, "Fetching season");
            let table = self.provider.fetch(kind, season).await?;
            let complete = policy.is_complete(&table, dir)?;

            match policy.on_fetched(complete) {
                CacheAction::Store { complete } => {
                    store.write(&table, kind, season)?;
                    metadata.record(season, complete);
                    metadata_store.save(&metadata, kind)?;
                    info!(season = %season, complete, "Cached season");
                }
                CacheAction::Skip => {
                    debug!(season = %season, "Season incomplete, not caching");
                }
            }
            frames.push(table);
        }

        concat_seasons(frames)
    }
}

/// Concatenates per-season tables in order without deduplication.
fn concat_seasons(frames: Vec<DataFrame>) -> Result<DataFrame> {
    match frames.len() {
        0 => Ok(DataFrame::empty()),
        1 => Ok(frames.into_iter().next().unwrap_or_else(DataFrame::empty)),
        _ => concat_lf_diagonal(
            frames.into_iter().map(IntoLazy::lazy).collect::<Vec<_>>(),
            UnionArgs {
                to_supertypes: true,
                ..Default::default()
            },
        )
        .map_err(|e| DataError::Other(e.to_string()))?
        .collect()
        .map_err(|e| DataError::Other(e.to_string())),
    }
}
