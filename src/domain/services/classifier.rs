//! Directory classification service
//!
//! Pure functions mapping a directory path to its `DirectoryRole`. Nothing
//! here touches the file system, so the rules can be tested on plain paths.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::DirectoryRole;

/// Directory name marking a REST extension unit
pub const REST_DIR: &str = "REST";
/// Segment routing a REST unit to the staging tier
pub const INPUT_SEGMENT: &str = "input";
/// Segment routing a REST unit to the final tier
pub const HARMONIZE_SEGMENT: &str = "harmonize";

/// Classify `directory` relative to `entities_root`.
///
/// Precedence: a `REST` final segment wins, then direct children of the
/// entities root, then everything else is `Unclassified`. For REST units,
/// `input` is checked before `harmonize` across every segment between the
/// entities root and the `REST` directory.
pub fn classify(directory: &Path, entities_root: &Path) -> DirectoryRole {
    if directory.file_name() == Some(OsStr::new(REST_DIR)) {
        return classify_rest(directory, entities_root);
    }

    if directory.parent() == Some(entities_root) {
        return DirectoryRole::EntityDefinitionsLeaf;
    }

    DirectoryRole::Unclassified
}

fn classify_rest(directory: &Path, entities_root: &Path) -> DirectoryRole {
    let scope = directory.strip_prefix(entities_root).unwrap_or(directory);
    let ancestors: Vec<&OsStr> = scope
        .parent()
        .map(|p| {
            p.components()
                .filter_map(|c| match c {
                    Component::Normal(segment) => Some(segment),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if ancestors.iter().any(|s| *s == INPUT_SEGMENT) {
        DirectoryRole::RestInput
    } else if ancestors.iter().any(|s| *s == HARMONIZE_SEGMENT) {
        DirectoryRole::RestHarmonize
    } else {
        DirectoryRole::UnroutedRest
    }
}

/// Resolved plugin tree locations of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_root: PathBuf,
    plugins_root: PathBuf,
    entities_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(
        project_root: impl Into<PathBuf>,
        plugins_dir: impl AsRef<Path>,
        entities_dir: impl AsRef<Path>,
    ) -> Self {
        let project_root = project_root.into();
        let plugins_root = project_root.join(plugins_dir);
        let entities_root = plugins_root.join(entities_dir);
        Self {
            project_root,
            plugins_root,
            entities_root,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn plugins_root(&self) -> &Path {
        &self.plugins_root
    }

    pub fn entities_root(&self) -> &Path {
        &self.entities_root
    }

    /// Role of any directory in the project, including the plugins root
    pub fn role_of(&self, directory: &Path) -> DirectoryRole {
        if directory == self.plugins_root {
            return DirectoryRole::GenericModuleRoot;
        }
        classify(directory, &self.entities_root)
    }

    /// Whether `file` is deployed by the entities walk rather than the
    /// generic module upload.
    ///
    /// The walk owns files below a routed REST directory and files directly
    /// inside an entity definitions directory. Only the topmost `REST`
    /// directory counts, since the walk never descends past it.
    pub fn is_walk_owned(&self, file: &Path) -> bool {
        let Ok(relative) = file.strip_prefix(&self.entities_root) else {
            return false;
        };
        let Some(relative_dir) = relative.parent() else {
            return false;
        };

        let mut current = self.entities_root.clone();
        for component in relative_dir.components() {
            let Component::Normal(segment) = component else {
                continue;
            };
            current.push(segment);
            if segment == REST_DIR {
                return classify(&current, &self.entities_root).target().is_some();
            }
        }

        file.parent()
            .and_then(Path::parent)
            .is_some_and(|grandparent| grandparent == self.entities_root)
    }
}
