// Engine module - view-model derivation over loaded snapshots.
// This layer sits between the snapshot schemas (types) and CLI presentation.
// Everything here is pure: plain data in, plain data out, no IO.

pub mod date;
pub mod filter;
pub mod paginate;
pub mod ranking;
pub mod sort;
pub mod trends;

pub use date::{FormatError, format_date};
pub use filter::{FilterCriteria, FilterOptions, apply_filters, derive_filter_options};
pub use paginate::{PAGE_SIZE, Page, paginate, total_pages};
pub use ranking::rank_counts;
pub use sort::{SortKey, compare, parse_timestamp, sort_by};
pub use trends::{ChartKind, chart_kind, multilingual_ratio_series};
