use std::io;
use std::path::PathBuf;

/// Errors raised while resolving a prefixed module request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("[ContextLoader] the request was not a string: {0}")]
    InvalidRequest(String),

    #[error("File {remainder} not found in {}", cwd.display())]
    NotFound {
        remainder: String,
        cwd: PathBuf,
        searched: Vec<PathBuf>,
    },

    #[error("No alias named '{0}' is configured")]
    UnknownAlias(String),

    #[error("Alias cycle detected: {}", chain.join(" -> "))]
    AliasCycle { chain: Vec<String> },

    #[error("Request {0} was made again while it was still loading")]
    CircularRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a full load: either resolution failed, or the host loader did.
///
/// The host's own error is carried untouched so passthrough requests fail
/// exactly as they would without the context loader in front.
#[derive(Debug, thiserror::Error)]
pub enum LoadError<E> {
    #[error(transparent)]
    Resolve(#[from] Error),

    #[error(transparent)]
    Host(E),
}

impl<E> LoadError<E> {
    /// The resolution error, if resolution is what failed
    pub fn as_resolve(&self) -> Option<&Error> {
        match self {
            LoadError::Resolve(e) => Some(e),
            LoadError::Host(_) => None,
        }
    }

    /// The host loader's error, if the host is what failed
    pub fn as_host(&self) -> Option<&E> {
        match self {
            LoadError::Host(e) => Some(e),
            LoadError::Resolve(_) => None,
        }
    }
}
