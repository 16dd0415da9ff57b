// Runtime module - everything between "a site location" and "a page ready to present":
// fetching snapshot documents, holding per-page state, reading the config file.

pub mod config;
pub mod error;
pub mod loader;
pub mod pages;
pub mod source;

pub use config::Config;
pub use error::{Error, LoadError, Result};
pub use loader::{RESOURCE_CATALOG, RESOURCE_CHANGELOG, RESOURCE_STATISTICS, RESOURCE_TRENDS, load};
pub use pages::{
    CatalogPage, CatalogView, ChangelogPage, Page, PageState, StatisticsPage, TrendsPage,
};
pub use source::{FsSource, HttpSource, SiteLocation, SnapshotSource};
