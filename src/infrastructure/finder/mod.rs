//! File system artifact finder
//!
//! Implements the `ArtifactFinder` port on top of the `ignore` crate's
//! walker. Hidden files and directories are always skipped, and the project's
//! ignore list is applied to every entry.

use std::path::Path;
use std::sync::Arc;

use ignore::WalkBuilder;

use crate::domain::entities::Artifact;
use crate::domain::ports::{ArtifactFinder, FinderKind, FsError};
use crate::domain::services::ProjectLayout;
use crate::domain::value_objects::IgnorePatterns;
use crate::error::{HubloadError, HubloadResult};
use crate::infrastructure::fs::modified_millis;

/// Default extensions treated as pre-compiled binary modules
pub const DEFAULT_BINARY_EXTENSIONS: &[&str] =
    &["class", "jar", "so", "dll", "dylib", "exe", "bin"];

pub struct FsArtifactFinder {
    layout: ProjectLayout,
    ignore: Arc<IgnorePatterns>,
    binary_extensions: Vec<String>,
}

impl FsArtifactFinder {
    pub fn new(layout: ProjectLayout, ignore: IgnorePatterns) -> Self {
        Self {
            layout,
            ignore: Arc::new(ignore),
            binary_extensions: DEFAULT_BINARY_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn with_binary_extensions(mut self, extensions: Vec<String>) -> Self {
        self.binary_extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    fn is_binary(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.binary_extensions.iter().any(|b| *b == ext))
    }

    fn accepts(&self, path: &Path, kind: FinderKind) -> bool {
        match kind {
            FinderKind::GenericModules => !self.layout.is_walk_owned(path),
            FinderKind::AllButBinary => !self.is_binary(path),
            FinderKind::EntityDefinitions => true,
        }
    }
}

impl ArtifactFinder for FsArtifactFinder {
    fn find(&self, directory: &Path, kind: FinderKind) -> HubloadResult<Vec<Artifact>> {
        let ignore = Arc::clone(&self.ignore);
        let mut builder = WalkBuilder::new(directory);
        builder
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .sort_by_file_path(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                entry.depth() == 0 || !ignore.is_ignored(entry.path(), is_dir)
            });
        if kind == FinderKind::EntityDefinitions {
            builder.max_depth(Some(1));
        }

        let mut artifacts = Vec::new();
        for entry in builder.build() {
            let entry = entry.map_err(|e| HubloadError::Traversal {
                path: directory.to_path_buf(),
                source: FsError::Other(e.to_string()),
            })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !self.accepts(path, kind) {
                continue;
            }
            let modified = modified_millis(path).map_err(|source| HubloadError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            artifacts.push(Artifact::new(path, modified));
        }

        Ok(artifacts)
    }

    fn admits_directory(&self, directory: &Path) -> bool {
        !is_hidden(directory) && !self.ignore.is_ignored(directory, true)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, rel).unwrap();
    }

    fn rel_paths(root: &Path, artifacts: &[Artifact]) -> Vec<PathBuf> {
        artifacts
            .iter()
            .map(|a| a.path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn generic_finder_excludes_walk_owned_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "plugins/ext/lib.sjs");
        touch(root, "plugins/entities/Order/Order.entity.json");
        touch(root, "plugins/entities/Order/input/Load/main.sjs");
        touch(root, "plugins/entities/Order/input/Load/REST/transforms/t.sjs");

        let layout = ProjectLayout::new(root, "plugins", "entities");
        let finder = FsArtifactFinder::new(layout.clone(), IgnorePatterns::empty());
        let found = finder
            .find(layout.plugins_root(), FinderKind::GenericModules)
            .unwrap();

        assert_eq!(
            rel_paths(root, &found),
            vec![
                PathBuf::from("plugins/entities/Order/input/Load/main.sjs"),
                PathBuf::from("plugins/ext/lib.sjs"),
            ]
        );
    }

    #[test]
    fn hidden_and_ignored_files_are_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "plugins/.DS_Store");
        touch(root, "plugins/.git/config");
        touch(root, "plugins/scratch/tmp.sjs");
        touch(root, "plugins/keep.sjs");
        touch(root, "plugins/old.bak");

        let layout = ProjectLayout::new(root, "plugins", "entities");
        let ignore =
            IgnorePatterns::from_content(root, &root.join(".hubignore"), "scratch/\n*.bak")
                .unwrap();
        let finder = FsArtifactFinder::new(layout.clone(), ignore);
        let found = finder
            .find(layout.plugins_root(), FinderKind::GenericModules)
            .unwrap();

        assert_eq!(rel_paths(root, &found), vec![PathBuf::from("plugins/keep.sjs")]);
    }

    #[test]
    fn hidden_and_ignored_directories_are_not_admitted() {
        let root = Path::new("/proj");
        let layout = ProjectLayout::new(root, "plugins", "entities");
        let ignore =
            IgnorePatterns::from_content(root, &root.join(".hubignore"), "Legacy/").unwrap();
        let finder = FsArtifactFinder::new(layout, ignore);

        assert!(finder.admits_directory(Path::new("/proj/plugins/entities/Customer")));
        assert!(!finder.admits_directory(Path::new("/proj/plugins/entities/.svn")));
        assert!(!finder.admits_directory(Path::new("/proj/plugins/entities/Legacy")));
    }

    #[test]
    fn all_but_binary_skips_compiled_modules() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "REST/services/svc.xqy");
        touch(root, "REST/lib/helper.JAR");
        touch(root, "REST/lib/Helper.class");

        let layout = ProjectLayout::new(root, "plugins", "entities");
        let finder = FsArtifactFinder::new(layout, IgnorePatterns::empty());
        let found = finder.find(&root.join("REST"), FinderKind::AllButBinary).unwrap();

        assert_eq!(rel_paths(root, &found), vec![PathBuf::from("REST/services/svc.xqy")]);
    }

    #[test]
    fn configured_binary_extensions_replace_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "REST/a.jar");
        touch(root, "REST/b.xqc");

        let layout = ProjectLayout::new(root, "plugins", "entities");
        let finder = FsArtifactFinder::new(layout, IgnorePatterns::empty())
            .with_binary_extensions(vec![".xqc".to_string()]);
        let found = finder.find(&root.join("REST"), FinderKind::AllButBinary).unwrap();

        assert_eq!(rel_paths(root, &found), vec![PathBuf::from("REST/a.jar")]);
    }

    #[test]
    fn entity_definitions_are_not_recursive() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "Order/Order.entity.json");
        touch(root, "Order/input/Load/main.sjs");

        let layout = ProjectLayout::new(root, "plugins", "entities");
        let finder = FsArtifactFinder::new(layout, IgnorePatterns::empty());
        let found = finder
            .find(&root.join("Order"), FinderKind::EntityDefinitions)
            .unwrap();

        assert_eq!(rel_paths(root, &found), vec![PathBuf::from("Order/Order.entity.json")]);
    }
}
