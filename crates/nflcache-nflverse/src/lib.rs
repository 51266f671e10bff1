#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nflcache/nflcache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! nflverse data provider.
//!
//! This crate provides an nflverse data provider that implements the
//! [`DataProvider`] and [`SeasonDataProvider`] traits from `nflcache-core`.
//!
//! # Features
//!
//! - Fetch one season of play-by-play data from the nflverse Parquet releases
//! - Fetch one season of the game schedule from the nflverse games CSV
//! - List the seasons for which play-by-play releases exist
//!
//! # Example
//!
//! ```no_run
//! use nflcache_nflverse::NflverseProvider;
//! use nflcache_core::{SeasonDataProvider, Season};
//!
//! # async fn example() -> nflcache_core::Result<()> {
//! let provider = NflverseProvider::new();
//! let df = provider.fetch_schedule(Season::new(2023)).await?;
//! println!("Fetched {} games", df.height());
//! # Ok(())
//! # }
//! ```

use std::io::Cursor;
use std::time::Duration;

use async_trait::async_trait;
use nflcache_core::{DataError, DataProvider, Result, Season, SeasonDataProvider};
use polars::prelude::*;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Release download base URL for play-by-play Parquet files.
const PBP_RELEASE_URL: &str = "https://github.com/nflverse/nflverse-data/releases/download/pbp";

/// GitHub API URL describing the play-by-play release.
const PBP_RELEASE_API_URL: &str =
    "https://api.github.com/repos/nflverse/nflverse-data/releases/tags/pbp";

/// League-wide schedule of every game since 1999.
const SCHEDULES_URL: &str = "https://github.com/nflverse/nfldata/raw/master/data/games.csv";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// User agent for HTTP requests.
const USER_AGENT: &str = concat!("nflcache/", env!("CARGO_PKG_VERSION"));

/// Rows scanned to infer the schedule CSV schema.
const CSV_INFER_SCHEMA_ROWS: usize = 10_000;

/// nflverse data provider.
///
/// Implements [`DataProvider`] and [`SeasonDataProvider`]. Requests are made
/// once; retry policy is left to the caller.
#[derive(Debug, Clone)]
pub struct NflverseProvider {
    client: reqwest::Client,
}

impl NflverseProvider {
    /// Create a new nflverse provider with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new nflverse provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Create a new nflverse provider with a custom request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Build the play-by-play download URL for a season.
    fn pbp_url(season: Season) -> String {
        format!("{}/play_by_play_{}.parquet", PBP_RELEASE_URL, season)
    }

    /// Download a resource, mapping transport and HTTP failures.
    async fn download(&self, url: &str, season: Season) -> Result<Vec<u8>> {
        debug!("Downloading {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::Fetch {
                season,
                message: format!("no data published at {}", url),
            });
        }

        if !response.status().is_success() {
            return Err(DataError::Network(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Parse a Parquet payload into a DataFrame.
    fn parse_parquet(bytes: Vec<u8>, season: Season) -> Result<DataFrame> {
        ParquetReader::new(Cursor::new(bytes))
            .finish()
            .map_err(|e| DataError::Fetch {
                season,
                message: format!("malformed Parquet: {}", e),
            })
    }

    /// Parse the schedule CSV and keep the rows of one season.
    fn parse_schedule(bytes: Vec<u8>, season: Season) -> Result<DataFrame> {
        let all = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(CSV_INFER_SCHEMA_ROWS))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(|e| DataError::Fetch {
                season,
                message: format!("malformed schedule CSV: {}", e),
            })?;

        let df = all
            .lazy()
            .filter(col("season").eq(lit(season.year())))
            .collect()
            .map_err(|e| DataError::Fetch {
                season,
                message: e.to_string(),
            })?;

        if df.height() == 0 {
            return Err(DataError::Fetch {
                season,
                message: "no scheduled games".to_string(),
            });
        }
        Ok(df)
    }

    /// Lists the seasons with a published play-by-play release, ascending.
    ///
    /// # Errors
    /// Returns [`DataError::Network`] or [`DataError::Parse`] if the release
    /// listing cannot be retrieved.
    pub async fn available_play_by_play_seasons(&self) -> Result<Vec<Season>> {
        let response = self
            .client
            .get(PBP_RELEASE_API_URL)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DataError::Network(format!(
                "HTTP {} for {}",
                response.status(),
                PBP_RELEASE_API_URL
            )));
        }

        let release: Release = response
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        Ok(release.play_by_play_seasons())
    }
}

impl Default for NflverseProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for NflverseProvider {
    fn name(&self) -> &str {
        "nflverse"
    }

    fn description(&self) -> &str {
        "nflverse open data releases for play-by-play and schedules"
    }
}

#[async_trait]
impl SeasonDataProvider for NflverseProvider {
    #[instrument(skip(self), fields(season = %season))]
    async fn fetch_play_by_play(&self, season: Season) -> Result<DataFrame> {
        let bytes = self.download(&Self::pbp_url(season), season).await?;
        let df = Self::parse_parquet(bytes, season)?;
        debug!(rows = df.height(), "Fetched play-by-play");
        Ok(df)
    }

    #[instrument(skip(self), fields(season = %season))]
    async fn fetch_schedule(&self, season: Season) -> Result<DataFrame> {
        let bytes = self.download(SCHEDULES_URL, season).await?;
        let df = Self::parse_schedule(bytes, season)?;
        debug!(rows = df.height(), "Fetched schedule");
        Ok(df)
    }
}

// ============================================================================
// GitHub Release API Response Types
// ============================================================================

/// Release listing response.
#[derive(Debug, Deserialize)]
struct Release {
    assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Deserialize)]
struct ReleaseAsset {
    name: String,
}

impl Release {
    /// Extract seasons from asset names like `play_by_play_2023.parquet`.
    fn play_by_play_seasons(&self) -> Vec<Season> {
        let mut seasons: Vec<Season> = self
            .assets
            .iter()
            .filter_map(|a| {
                a.name
                    .strip_prefix("play_by_play_")?
                    .strip_suffix(".parquet")?
                    .parse()
                    .ok()
            })
            .collect();
        seasons.sort();
        seasons.dedup();
        seasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pbp_url() {
        let url = NflverseProvider::pbp_url(Season::new(2022));
        assert!(url.ends_with("/pbp/play_by_play_2022.parquet"));
    }

    #[test]
    fn test_provider_info() {
        let provider = NflverseProvider::new();
        assert_eq!(provider.name(), "nflverse");
        assert!(!provider.description().is_empty());
    }

    #[test]
    fn test_default() {
        let provider = NflverseProvider::default();
        assert_eq!(provider.name(), "nflverse");
    }

    #[test]
    fn test_parse_schedule_filters_season() {
        let csv = "game_id,season,game_type,gameday\n\
                   2022_01_BUF_LA,2022,REG,2022-09-08\n\
                   2022_22_KC_PHI,2022,SB,2023-02-12\n\
                   2023_01_DET_KC,2023,REG,2023-09-07\n";

        let df = NflverseProvider::parse_schedule(csv.as_bytes().to_vec(), Season::new(2022))
            .unwrap();
        assert_eq!(df.height(), 2);

        let missing = NflverseProvider::parse_schedule(csv.as_bytes().to_vec(), Season::new(1990));
        assert!(matches!(missing, Err(DataError::Fetch { .. })));
    }

    #[test]
    fn test_parse_parquet_rejects_garbage() {
        let result = NflverseProvider::parse_parquet(b"not parquet".to_vec(), Season::new(2020));
        assert!(matches!(result, Err(DataError::Fetch { .. })));
    }

    #[test]
    fn test_release_seasons() {
        let release: Release = serde_json::from_str(
            r#"{"assets": [
                {"name": "play_by_play_2021.parquet"},
                {"name": "play_by_play_1999.parquet"},
                {"name": "play_by_play_2021.csv.gz"},
                {"name": "timestamp.txt"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            release.play_by_play_seasons(),
            vec![Season::new(1999), Season::new(2021)]
        );
    }
}
