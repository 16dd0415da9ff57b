pub mod catalog;
pub mod changelog;
pub mod notice;
pub mod stats;
pub mod trends;

pub use catalog::{
    present_catalog, present_dataset_card, present_export, present_filter_options,
    present_pagination,
};
pub use changelog::{present_changelog, present_updated_badges};
pub use notice::{fallback_key, notice, present_failure};
pub use stats::{present_statistics, present_statistics_panel};
pub use trends::{present_chart, present_trend_summary, present_trends};

use kodata_engine::format_date;

/// `YYYYMMDD` → `YYYY-MM-DD`, or the raw value when it is not an 8-digit date
pub(crate) fn display_date(raw: &str) -> String {
    match format_date(raw) {
        Ok(date) => date,
        Err(err) => {
            tracing::warn!(error = %err, "leaving malformed date unformatted");
            raw.to_string()
        }
    }
}
