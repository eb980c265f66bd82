//! Artifact entity - a deployable local file
//!
//! Identity is the path. Content is not held here; it is read through the
//! `FileSystem` port at the moment of transmission.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Absolute, normalized path
    path: PathBuf,
    /// Last modification time in milliseconds since the Unix epoch
    modified: u64,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, modified: u64) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn modified(&self) -> u64 {
        self.modified
    }

    /// Final path segment, or an empty string for odd paths
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
