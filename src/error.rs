//! Error types for hubload
//!
//! Uses `thiserror` for library errors. Every variant here is fatal to a
//! deploy run; callers bubble them up with `?` and the binary adds context
//! through `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, RecordStoreError};
use crate::domain::value_objects::{IgnoreError, Target};

/// Result type alias for hubload operations
pub type HubloadResult<T> = Result<T, HubloadError>;

/// Main error type for hubload operations
#[derive(Error, Debug)]
pub enum HubloadError {
    /// A remote write was rejected or could not be delivered
    #[error("failed to transmit '{uri}' to {target}: {message}")]
    Transmission {
        target: Target,
        uri: String,
        message: String,
    },

    /// A local artifact could not be read
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The directory walk itself failed
    #[error("failed to traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Persisted deployment timestamps could not be loaded or saved
    #[error(transparent)]
    RecordStore(#[from] RecordStoreError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Invalid ignore patterns
    #[error(transparent)]
    Ignore(#[from] IgnoreError),

    /// Path escapes the module root
    #[error("path '{path}' is outside module root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HubloadError {
    /// Short machine-readable kind, used in the JSON event stream.
    pub fn kind(&self) -> &'static str {
        match self {
            HubloadError::Transmission { .. } => "transmission",
            HubloadError::FileRead { .. } => "file_read",
            HubloadError::Traversal { .. } => "traversal",
            HubloadError::RecordStore(_) => "record_store",
            HubloadError::Config { .. } => "config",
            HubloadError::Ignore(_) => "ignore",
            HubloadError::PathEscape { .. } => "path_escape",
            HubloadError::Io(_) => "io",
        }
    }
}
