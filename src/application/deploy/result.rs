//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use crate::domain::value_objects::{DeployChannel, DirectoryRole, Target};

/// A module sent (or, in a dry run, due to be sent) to a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedModule {
    pub target: Target,
    pub channel: DeployChannel,
    pub uri: String,
    pub path: PathBuf,
}

/// How the entities walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOutcome {
    /// Every reachable directory was visited or explicitly skipped
    #[default]
    Completed,
    /// The entities root does not exist; nothing was walked
    EntitiesRootMissing,
}

/// Result of a successful deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployResult {
    /// Modules transmitted, in upload order
    pub uploaded: Vec<UploadedModule>,
    /// Modules left alone because they were up to date
    pub skipped: Vec<PathBuf>,
    /// URIs of entity documents written to the final content store
    pub entity_documents: Vec<String>,
    /// REST directories met during the walk
    pub rest_directories: Vec<(PathBuf, DirectoryRole)>,
    pub walk: WalkOutcome,
    /// Whether the staging cache invalidation signal was delivered
    pub cache_invalidated: bool,
    /// Invalidation failure, reported but not fatal
    pub invalidation_error: Option<String>,
    pub dry_run: bool,
}

impl DeployResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded_to(&self, target: Target) -> impl Iterator<Item = &UploadedModule> {
        self.uploaded.iter().filter(move |m| m.target == target)
    }

    pub fn has_changes(&self) -> bool {
        !self.uploaded.is_empty() || !self.entity_documents.is_empty()
    }
}
