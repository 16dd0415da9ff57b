use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::LoadError;

/// Where snapshot documents are read from. Resources are site-relative paths
/// such as `data/trends.json`.
pub trait SnapshotSource {
    fn fetch(&self, resource: &str) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// A published site checked out on disk (e.g. the `docs/` directory)
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SnapshotSource for FsSource {
    fn fetch(&self, resource: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(resource);
        std::fs::read(&path).map_err(|err| LoadError::Unavailable {
            resource: resource.to_string(),
            reason: format!("{}: {}", path.display(), err),
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// A deployed site reached over HTTP(S)
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoadError> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| LoadError::Unavailable {
                resource: base_url.clone(),
                reason: err.to_string(),
            })?;

        Ok(Self { base_url, client })
    }

    fn url_for(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}

impl SnapshotSource for HttpSource {
    fn fetch(&self, resource: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(resource);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| LoadError::Unavailable {
                resource: resource.to_string(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|err| LoadError::Unavailable {
            resource: resource.to_string(),
            reason: err.to_string(),
        })?;

        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Parsed `--site` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteLocation {
    Directory(PathBuf),
    Url(String),
}

impl SiteLocation {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            SiteLocation::Url(trimmed.to_string())
        } else {
            SiteLocation::Directory(expand_tilde(trimmed))
        }
    }

    pub fn open(&self) -> Result<Box<dyn SnapshotSource>, LoadError> {
        match self {
            SiteLocation::Directory(path) => Ok(Box::new(FsSource::new(path.clone()))),
            SiteLocation::Url(url) => Ok(Box::new(HttpSource::new(url.clone())?)),
        }
    }
}

impl fmt::Display for SiteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteLocation::Directory(path) => write!(f, "{}", path.display()),
            SiteLocation::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
