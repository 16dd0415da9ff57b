pub mod catalog;
pub mod changelog;
pub mod notice;
pub mod stats;
pub mod trends;
pub mod tui;

pub use catalog::{CatalogView, FilterOptionsView};
pub use changelog::ChangelogView;
pub use stats::{StatisticsPanelView, StatisticsView};
pub use trends::TrendsView;
