#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nflcache/nflcache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! On-disk stores for season-scoped caching.
//!
//! This crate provides the persistent pieces of a cache directory:
//!
//! - [`SeasonStore`] - One table file per (dataset kind, season)
//! - [`MetadataStore`] - Season to completeness mapping per dataset kind
//! - [`ReferenceDateRegistry`] - Championship dates derived from schedules
//! - [`ParquetFormat`] - Default [`TableFormat`] implementation

mod fs;

/// Completeness metadata storage.
pub mod metadata;
/// Parquet table format.
pub mod parquet;
/// Reference date registry.
pub mod reference;
/// Per-season table storage.
pub mod season;

// Re-export the trait for convenience
pub use nflcache_core::TableFormat;

pub use metadata::MetadataStore;
pub use parquet::ParquetFormat;
pub use reference::{REFERENCE_DATES_FILE, ReferenceDateRegistry, derive_reference_dates};
pub use season::SeasonStore;
