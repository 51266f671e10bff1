#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nflcache/nflcache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for season-scoped NFL data caching.
//!
//! This crate provides the foundational abstractions:
//!
//! - [`SeasonDataProvider`](provider::SeasonDataProvider) - Remote source of season tables
//! - [`TableFormat`](format::TableFormat) - On-disk table serialization
//! - [`CompletenessPolicy`](completeness::CompletenessPolicy) - Per-kind cache decision table
//! - [`season_complete`](completeness::season_complete) - Completeness oracle
//! - [`championship_dates`](championship::championship_dates) - Built-in reference dates

/// Built-in championship game dates.
pub mod championship;
/// Season completeness detection and policy trait.
pub mod completeness;
/// Error types for data operations.
pub mod error;
/// Table serialization trait.
pub mod format;
/// Dataset kind definitions.
pub mod kind;
/// Provider traits for fetching season data.
pub mod provider;
/// Core data types (Season, CompletenessMetadata, ReferenceDates).
pub mod types;

// Re-export commonly used items at crate root
pub use championship::{championship_date, championship_dates};
pub use completeness::{CacheAction, CompletenessPolicy, column_dates, season_complete};
pub use error::{DataError, Result};
pub use format::TableFormat;
pub use kind::DatasetKind;
pub use provider::{DataProvider, SeasonDataProvider};
pub use types::{CompletenessMetadata, ReferenceDates, Season};
