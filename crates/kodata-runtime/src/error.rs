use thiserror::Error;

/// Result type for kodata-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to obtain a usable snapshot document. Terminal for the page that asked.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Network or file system failure before any bytes arrived
    #[error("{resource} is unavailable: {reason}")]
    Unavailable { resource: String, reason: String },

    /// The server answered with a non-success status
    #[error("{resource} returned HTTP {status}")]
    Status { resource: String, status: u16 },

    /// The body was not valid JSON for the expected document
    #[error("{resource} is malformed: {source}")]
    Malformed {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but breaks a structural invariant
    #[error("{resource} is invalid: {reason}")]
    Invalid { resource: String, reason: String },
}

impl LoadError {
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Unavailable { resource, .. }
            | LoadError::Status { resource, .. }
            | LoadError::Malformed { resource, .. }
            | LoadError::Invalid { resource, .. } => resource,
        }
    }
}

/// Error types that can occur in the runtime layer
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
