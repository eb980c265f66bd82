//! Directory-backed target store
//!
//! Materializes one target tier on local disk:
//!
//! ```text
//! <root>/modules/<uri>                  module namespace
//! <root>/content/<uri>                  content documents
//! <root>/content/<uri>.metadata.json    document collections
//! <root>/cache-generation               bumped on every invalidation
//! ```
//!
//! Useful for local development and for handing a prepared tree to a
//! separate transfer tool.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::DocumentMetadata;
use crate::domain::ports::{
    CacheInvalidator, ContentStore, FileSystem, ModuleStore, StoreError,
};
use crate::domain::value_objects::Target;
use crate::infrastructure::fs::{atomic_write, LocalFs};

const MODULES_DIR: &str = "modules";
const CONTENT_DIR: &str = "content";
const GENERATION_FILE: &str = "cache-generation";

#[derive(Serialize)]
struct MetadataSidecar<'a> {
    collections: Vec<&'a str>,
}

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    target: Target,
    root: PathBuf,
    fs: LocalFs,
}

impl DirectoryStore {
    pub fn new(target: Target, root: impl Into<PathBuf>) -> Self {
        Self {
            target,
            root: root.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Local path of `uri` inside `namespace`, rejecting traversal.
    fn resolve(&self, namespace: &str, uri: &str) -> Result<PathBuf, StoreError> {
        let mut path = self.root.join(namespace);
        let mut segments = 0;
        for component in Path::new(uri.trim_start_matches('/')).components() {
            match component {
                Component::Normal(segment) => {
                    path.push(segment);
                    segments += 1;
                }
                Component::CurDir => {}
                _ => return Err(StoreError::new(format!("invalid uri '{}'", uri))),
            }
        }
        if segments == 0 {
            return Err(StoreError::new(format!("invalid uri '{}'", uri)));
        }
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        self.fs
            .write(path, content)
            .map_err(|e| StoreError::new(e.to_string()))
    }

    /// Current cache generation (0 when never invalidated)
    pub fn cache_generation(&self) -> u64 {
        self.fs
            .read(&self.root.join(GENERATION_FILE))
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn module_path(&self, uri: &str) -> Option<PathBuf> {
        self.resolve(MODULES_DIR, uri).ok()
    }

    pub fn document_path(&self, uri: &str) -> Option<PathBuf> {
        self.resolve(CONTENT_DIR, uri).ok()
    }
}

impl ModuleStore for DirectoryStore {
    fn target(&self) -> Target {
        self.target
    }

    fn write_module(&self, uri: &str, content: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(MODULES_DIR, uri)?;
        atomic_write(&path, content).map_err(|e| StoreError::new(e.to_string()))
    }
}

impl ContentStore for DirectoryStore {
    fn target(&self) -> Target {
        self.target
    }

    fn write_document(
        &self,
        uri: &str,
        content: &str,
        metadata: &DocumentMetadata,
    ) -> Result<(), StoreError> {
        let path = self.resolve(CONTENT_DIR, uri)?;
        self.write_file(&path, content)?;

        let sidecar = MetadataSidecar {
            collections: metadata.collections().collect(),
        };
        let json = serde_json::to_string_pretty(&sidecar)
            .map_err(|e| StoreError::new(e.to_string()))?;
        let mut sidecar_path = path.into_os_string();
        sidecar_path.push(".metadata.json");
        self.write_file(Path::new(&sidecar_path), &json)
    }
}

impl CacheInvalidator for DirectoryStore {
    fn invalidate(&self, target: Target) -> Result<(), StoreError> {
        if target != self.target {
            return Err(StoreError::new(format!(
                "store for {} cannot invalidate {}",
                self.target, target
            )));
        }
        let next = self.cache_generation() + 1;
        self.write_file(&self.root.join(GENERATION_FILE), &next.to_string())
    }
}
