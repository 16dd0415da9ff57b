use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings file. Every field can be overridden on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Site directory or base URL holding `data/*.json`
    #[serde(default)]
    pub site: Option<String>,

    /// `en` or `ko`
    #[serde(default)]
    pub locale: Option<String>,

    /// Default text density: `minimal`, `compact`, `standard` or `verbose`
    #[serde(default)]
    pub view: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `<config dir>/kodata/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("kodata").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine the user config directory".to_string()))
    }

    /// Explicit path if given, otherwise the default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Ok(path) => Self::load_from(&path),
                Err(_) => Ok(Self::default()),
            },
        }
    }
}
