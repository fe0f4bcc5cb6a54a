//! Error types for the fitlog_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// State file is missing or could not be read
    #[error("Unable to read from file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// State file is not valid JSON
    #[error("File {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// State file is valid JSON but a key is missing or has the wrong shape
    #[error("File {path:?} is not a fitness state document: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Destination could not be written
    #[error("Unable to write to file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A weight record has no JSON representation (NaN or infinite)
    #[error("Weight {weight} recorded on {date:?} is not a finite number")]
    NonFiniteWeight { date: String, weight: f64 },
}

impl Error {
    /// True for every failure of [`StateStore::load_into`](crate::StateStore::load_into):
    /// missing or unreadable file, malformed JSON, or a malformed document.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            Error::Read { .. } | Error::Parse { .. } | Error::Format { .. }
        )
    }

    /// True when the state file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
