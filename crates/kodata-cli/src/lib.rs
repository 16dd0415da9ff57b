// kodata reads the JSON snapshots a static site publishes (catalog, statistics,
// changelog, trends) and presents them in the terminal.
//
// Each page loads its documents once. A failed load shows that page's fallback
// message and nothing else; the other pages are unaffected. Every interaction
// after the load (search, filters, sort, paging) is recomputed locally from the
// snapshot held by the page, without another fetch.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod i18n;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
pub use logging::init_logging;
