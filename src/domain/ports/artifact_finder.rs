//! ArtifactFinder port - which files under a directory are deployable

use std::path::Path;

use crate::domain::entities::Artifact;
use crate::error::HubloadResult;

/// Selection strategy of a finder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderKind {
    /// Every file under the plugins root except those owned by the entities walk
    GenericModules,
    /// Every file under a REST directory except pre-compiled binary modules
    AllButBinary,
    /// Files directly inside an entity definitions directory
    EntityDefinitions,
}

pub trait ArtifactFinder {
    /// Candidate artifacts under `directory`, sorted by path
    fn find(&self, directory: &Path, kind: FinderKind) -> HubloadResult<Vec<Artifact>>;

    /// Whether the entities walk may enter `directory`. Must agree with the
    /// entries `find` skips.
    fn admits_directory(&self, directory: &Path) -> bool;
}
