use crate::types::{LocaleArg, LogLevel, OutputFormat, SortArg, ViewModeArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kodata")]
#[command(about = "Browse the Korean Hugging Face datasets catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Site directory or base URL serving data/*.json [default: docs]"
    )]
    pub site: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Text density [default: standard]")]
    pub view: Option<ViewModeArg>,

    #[arg(long, global = true, help = "Language for messages [default: en]")]
    pub locale: Option<LocaleArg>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Config file [default: <config dir>/kodata/config.toml]")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List datasets, one page at a time
    Catalog {
        #[arg(long, help = "Case-insensitive match against id and description")]
        search: Option<String>,

        #[arg(long, help = "Exact author name")]
        author: Option<String>,

        #[arg(long, help = "Task the dataset must list")]
        task: Option<String>,

        #[arg(long)]
        sort: Option<SortArg>,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, help = "Write every matching row (all pages) to a CSV file")]
        export: Option<PathBuf>,
    },

    /// Authors and tasks available as filters
    Filters,

    /// Catalog-wide statistics
    Stats,

    /// Differences between the two latest snapshots
    Changelog,

    /// Weekly growth charts
    Trends,

    /// Interactive dashboard
    Browse,
}
