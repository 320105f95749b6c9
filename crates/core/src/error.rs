use std::path::PathBuf;

use crate::registry::AssetKind;

/// Result alias used by every fallible function in the core and the shell.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that end a generation run.
///
/// None of these are retried. The caller decides how to present them and
/// which exit status to use.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Registry configuration is absent or unusable.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The registry answered with a non-success HTTP status.
    #[error("Failed to fetch {kind} from {url}: HTTP {status}")]
    Retrieval {
        kind: AssetKind,
        status: u16,
        url: String,
    },

    /// The registry payload (or a name derived from it) is unusable.
    #[error("Invalid {kind}: {reason}")]
    Validation { kind: AssetKind, reason: String },

    /// A directory could not be created or a file could not be written.
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced an HTTP response (DNS, connect, reset).
    #[error("Failed to reach registry for {kind} at {url}: {message}")]
    Transport {
        kind: AssetKind,
        url: String,
        message: String,
    },
}

impl Error {
    pub fn missing_base_url() -> Self {
        Error::Configuration {
            message: "missing base URL".to_string(),
        }
    }

    pub fn validation(kind: AssetKind, reason: impl Into<String>) -> Self {
        Error::Validation {
            kind,
            reason: reason.into(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}
