//! Test helpers: table builders and a counting in-memory provider.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use nflcache_core::{DataError, DataProvider, Result, Season, SeasonDataProvider};
use polars::prelude::*;

/// Builds a play-by-play table with one play per date.
pub(crate) fn pbp_table(season: i32, dates: &[&str]) -> DataFrame {
    DataFrame::new(vec![
        Column::new("season".into(), vec![season; dates.len()]),
        Column::new("game_date".into(), dates.to_vec()),
        Column::new("play_id".into(), (1..=dates.len() as i64).collect::<Vec<_>>()),
    ])
    .unwrap()
}

/// Builds a schedule table from (game_type, gameday) pairs.
pub(crate) fn schedule_table(season: i32, games: &[(&str, &str)]) -> DataFrame {
    DataFrame::new(vec![
        Column::new("season".into(), vec![season; games.len()]),
        Column::new(
            "game_type".into(),
            games.iter().map(|(t, _)| *t).collect::<Vec<_>>(),
        ),
        Column::new(
            "gameday".into(),
            games.iter().map(|(_, d)| *d).collect::<Vec<_>>(),
        ),
    ])
    .unwrap()
}

/// Returns the `season` column of a result table.
pub(crate) fn seasons_of(df: &DataFrame) -> Vec<i32> {
    df.column("season")
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

/// In-memory provider that counts fetches per dataset kind.
#[derive(Debug, Default)]
pub(crate) struct MockProvider {
    pbp: Mutex<HashMap<Season, DataFrame>>,
    schedules: Mutex<HashMap<Season, DataFrame>>,
    pbp_fetches: AtomicUsize,
    schedule_fetches: AtomicUsize,
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_pbp(&self, season: i32, table: DataFrame) {
        self.pbp.lock().unwrap().insert(Season::new(season), table);
    }

    pub(crate) fn set_schedule(&self, season: i32, table: DataFrame) {
        self.schedules
            .lock()
            .unwrap()
            .insert(Season::new(season), table);
    }

    pub(crate) fn pbp_fetches(&self) -> usize {
        self.pbp_fetches.load(Ordering::SeqCst)
    }

    pub(crate) fn schedule_fetches(&self) -> usize {
        self.schedule_fetches.load(Ordering::SeqCst)
    }

    fn lookup(tables: &Mutex<HashMap<Season, DataFrame>>, season: Season) -> Result<DataFrame> {
        tables
            .lock()
            .unwrap()
            .get(&season)
            .cloned()
            .ok_or_else(|| DataError::Fetch {
                season,
                message: "season not available".to_string(),
            })
    }
}

impl DataProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn description(&self) -> &str {
        "In-memory provider for tests"
    }
}

#[async_trait]
impl SeasonDataProvider for MockProvider {
    async fn fetch_play_by_play(&self, season: Season) -> Result<DataFrame> {
        self.pbp_fetches.fetch_add(1, Ordering::SeqCst);
        Self::lookup(&self.pbp, season)
    }

    async fn fetch_schedule(&self, season: Season) -> Result<DataFrame> {
        self.schedule_fetches.fetch_add(1, Ordering::SeqCst);
        Self::lookup(&self.schedules, season)
    }
}
