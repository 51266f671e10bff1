#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nflcache/nflcache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Season-aware caching layer for NFL data.
//!
//! This crate fetches season-scoped tables from a remote provider, stores
//! them in a cache directory and decides per season whether the cached copy
//! can be reused. It re-exports the core types, the on-disk stores and the
//! default provider, and provides the two public entry points:
//!
//! - [`PlayByPlay`] - caches a season only once it is complete
//! - [`Schedules`] - caches every season and refreshes incomplete ones on request
//!
//! # Features
//!
//! - `nflverse` - nflverse provider and the `nflverse()` constructors
//!
//! # Example
//!
//! ```rust,ignore
//! use nflcache::{Schedules, Season};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> nflcache::Result<()> {
//!     let schedules = Schedules::nflverse();
//!     let seasons = [Season::new(2022), Season::new(2023), Season::new(2024)];
//!
//!     let df = schedules.get(&seasons, Some(Path::new("cache/")), true).await?;
//!     println!("{:?}", df);
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use nflcache_core::*;

// On-disk stores
pub use nflcache_store::{
    MetadataStore, ParquetFormat, ReferenceDateRegistry, SeasonStore, derive_reference_dates,
};

// Providers
#[cfg(feature = "nflverse")]
pub use nflcache_nflverse::NflverseProvider;

mod pbp;
mod policy;
mod retriever;
mod schedules;

#[cfg(test)]
mod testing;

pub use pbp::PlayByPlay;
pub use policy::{PlayByPlayPolicy, SchedulePolicy};
pub use schedules::Schedules;
