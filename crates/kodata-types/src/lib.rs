//! Snapshot schemas consumed by the kodata dashboard.
//!
//! Each JSON document published by the collector has a matching type here:
//! - `data/korean_datasets.json` → [`CatalogSnapshot`]
//! - `data/statistics.json` → [`StatisticsDocument`]
//! - `data/changelog.json` → [`Changelog`]
//! - `data/trends.json` → [`TrendsDocument`]

pub mod catalog;
pub mod changelog;
pub mod error;
pub mod trends;

pub use catalog::*;
pub use changelog::*;
pub use error::{Error, Result};
pub use trends::*;
