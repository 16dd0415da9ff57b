pub mod catalog;
pub mod changelog;
pub mod common;
pub mod result;
pub mod stats;
pub mod trends;

pub use catalog::{
    CatalogQuery, CatalogViewModel, DatasetCard, ExportViewModel, FilterOptionsViewModel,
    PaginationControl,
};
pub use changelog::{
    Badge, BadgeKind, BadgeTone, ChangeKind, ChangelogItem, ChangelogSummary, ChangelogViewModel,
};
pub use common::{
    Guidance, NoticeViewModel, OutputFormat, PanelState, StatusBadge, StatusLevel, ViewMode,
};
pub use result::CommandResultViewModel;
pub use stats::{RankedEntry, StatisticsPanel, StatisticsViewModel};
pub use trends::{ChartConfig, TrendSummary, TrendsViewModel, YAxis};

use std::fmt;

/// Bridges a view model to its text layout for a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
