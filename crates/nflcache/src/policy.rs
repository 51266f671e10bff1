//! Completeness policies for the two dataset kinds.

use std::path::Path;

use nflcache_core::{
    CacheAction, CompletenessPolicy, DatasetKind, ReferenceDates, Result, championship_dates,
    season_complete,
};
use nflcache_store::ReferenceDateRegistry;
use polars::prelude::DataFrame;

/// Play-by-play rules.
///
/// Only complete seasons are cached and recorded, so any recorded season is
/// served from cache. Incomplete seasons are fetched on every call.
#[derive(Debug, Clone)]
pub struct PlayByPlayPolicy {
    reference: ReferenceDates,
}

impl PlayByPlayPolicy {
    /// Create a policy judging completeness against the built-in
    /// championship dates.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reference_dates(championship_dates())
    }

    /// Create a policy judging completeness against custom dates.
    #[must_use]
    pub fn with_reference_dates(reference: ReferenceDates) -> Self {
        Self { reference }
    }
}

impl Default for PlayByPlayPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletenessPolicy for PlayByPlayPolicy {
    fn kind(&self) -> DatasetKind {
        DatasetKind::PlayByPlay
    }

    fn use_cached(&self, _recorded: bool) -> bool {
        true
    }

    fn is_complete(&self, table: &DataFrame, _cache_dir: &Path) -> Result<bool> {
        Ok(season_complete(
            table,
            DatasetKind::PlayByPlay.date_column(),
            &self.reference,
        ))
    }

    fn on_fetched(&self, complete: bool) -> CacheAction {
        if complete {
            CacheAction::Store { complete: true }
        } else {
            CacheAction::Skip
        }
    }
}

/// Schedule rules.
///
/// Every fetched season is cached and its completeness recorded, including
/// `false`. Seasons recorded incomplete are refetched only when
/// `update_last_season` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulePolicy {
    update_last_season: bool,
}

impl SchedulePolicy {
    /// Create a schedule policy.
    #[must_use]
    pub const fn new(update_last_season: bool) -> Self {
        Self { update_last_season }
    }

    /// Returns true if incomplete seasons are refetched.
    #[must_use]
    pub const fn update_last_season(&self) -> bool {
        self.update_last_season
    }
}

impl CompletenessPolicy for SchedulePolicy {
    fn kind(&self) -> DatasetKind {
        DatasetKind::Schedule
    }

    fn use_cached(&self, recorded: bool) -> bool {
        recorded || !self.update_last_season
    }

    fn is_complete(&self, table: &DataFrame, cache_dir: &Path) -> Result<bool> {
        // Seeded with the table under judgement; a season lacking its
        // championship row adds nothing and stays incomplete.
        let reference =
            ReferenceDateRegistry::new(cache_dir).load_or_seed(std::slice::from_ref(table))?;
        Ok(season_complete(
            table,
            DatasetKind::Schedule.date_column(),
            &reference,
        ))
    }

    fn on_fetched(&self, complete: bool) -> CacheAction {
        CacheAction::Store { complete }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pbp_table, schedule_table};

    #[test]
    fn test_play_by_play_decision_table() {
        let policy = PlayByPlayPolicy::new();
        assert!(policy.use_cached(true));
        assert!(policy.use_cached(false));
        assert_eq!(policy.on_fetched(true), CacheAction::Store { complete: true });
        assert_eq!(policy.on_fetched(false), CacheAction::Skip);
    }

    #[test]
    fn test_schedule_decision_table() {
        let stale_ok = SchedulePolicy::new(false);
        assert!(stale_ok.use_cached(true));
        assert!(stale_ok.use_cached(false));

        let refresh = SchedulePolicy::new(true);
        assert!(refresh.use_cached(true));
        assert!(!refresh.use_cached(false));

        assert_eq!(refresh.on_fetched(false), CacheAction::Store { complete: false });
        assert_eq!(refresh.on_fetched(true), CacheAction::Store { complete: true });
    }

    #[test]
    fn test_play_by_play_completeness() {
        let dir = tempfile::tempdir().unwrap();
        let policy = PlayByPlayPolicy::new();

        let complete = pbp_table(1999, &["1999-09-12", "2000-01-30"]);
        let partial = pbp_table(2024, &["2024-09-05"]);
        assert!(policy.is_complete(&complete, dir.path()).unwrap());
        assert!(!policy.is_complete(&partial, dir.path()).unwrap());
    }

    #[test]
    fn test_schedule_completeness_seeds_registry() {
        let dir = tempfile::tempdir().unwrap();
        let policy = SchedulePolicy::new(false);

        let partial = schedule_table(2024, &[("REG", "2024-09-05")]);
        assert!(!policy.is_complete(&partial, dir.path()).unwrap());

        let complete = schedule_table(2023, &[("REG", "2023-09-07"), ("SB", "2024-02-11")]);
        assert!(policy.is_complete(&complete, dir.path()).unwrap());

        let registry = ReferenceDateRegistry::new(dir.path()).load().unwrap();
        assert_eq!(registry.len(), 1);
    }
}
