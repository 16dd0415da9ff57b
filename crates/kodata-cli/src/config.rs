use anyhow::{Context, Result};
use kodata_runtime::{Config, SiteLocation};

use crate::args::Cli;
use crate::i18n::{Locale, Messages};
use crate::presentation::{OutputFormat, ViewMode};

pub const DEFAULT_SITE: &str = "docs";

/// Effective settings: command-line flags over the config file over defaults
#[derive(Debug, Clone)]
pub struct Settings {
    pub site: SiteLocation,
    pub locale: Locale,
    pub view: ViewMode,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = Config::resolve(cli.config.as_deref()).with_context(|| match &cli.config {
            Some(path) => format!("Failed to read config file {}", path.display()),
            None => "Failed to read config file".to_string(),
        })?;

        Ok(Self::merge(cli, &config))
    }

    fn merge(cli: &Cli, config: &Config) -> Self {
        let site = cli
            .site
            .as_deref()
            .or(config.site.as_deref())
            .unwrap_or(DEFAULT_SITE);

        let locale = match cli.locale {
            Some(arg) => arg.into(),
            None => config
                .locale
                .as_deref()
                .and_then(|raw| {
                    let parsed = Locale::parse(raw);
                    if parsed.is_none() {
                        tracing::warn!(locale = raw, "unsupported locale in config, using en");
                    }
                    parsed
                })
                .unwrap_or_default(),
        };

        let view = match cli.view {
            Some(arg) => arg.into(),
            None => config
                .view
                .as_deref()
                .and_then(|raw| {
                    let parsed = ViewMode::parse(raw);
                    if parsed.is_none() {
                        tracing::warn!(view = raw, "unknown view in config, using standard");
                    }
                    parsed
                })
                .unwrap_or_default(),
        };

        Self {
            site: SiteLocation::parse(site),
            locale,
            view,
            format: cli.format.into(),
        }
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("kodata").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(&cli(&["catalog"]), &Config::default());

        assert_eq!(settings.site, SiteLocation::Directory(PathBuf::from("docs")));
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.view, ViewMode::Standard);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            site: Some("https://example.org/site".to_string()),
            locale: Some("ko".to_string()),
            view: Some("compact".to_string()),
        };

        let from_file = Settings::merge(&cli(&["stats"]), &config);
        assert_eq!(from_file.locale, Locale::Ko);
        assert_eq!(from_file.view, ViewMode::Compact);
        assert!(matches!(from_file.site, SiteLocation::Url(_)));

        let overridden = Settings::merge(
            &cli(&["--locale", "en", "--view", "verbose", "--site", "public", "stats"]),
            &config,
        );
        assert_eq!(overridden.locale, Locale::En);
        assert_eq!(overridden.view, ViewMode::Verbose);
        assert_eq!(overridden.site, SiteLocation::Directory(PathBuf::from("public")));
    }

    #[test]
    fn test_unknown_config_values_use_defaults() {
        let config = Config {
            site: None,
            locale: Some("fr".to_string()),
            view: Some("huge".to_string()),
        };
        let settings = Settings::merge(&cli(&["trends"]), &config);

        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.view, ViewMode::Standard);
    }
}
