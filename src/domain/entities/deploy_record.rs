//! Deployment record entity - last deployed timestamp per file
//!
//! A pure data structure; persistence goes through `DeploymentRecordRepository`.

use std::collections::BTreeMap;
use std::path::Path;

/// Normalize a path for record storage (always use forward slashes).
pub(crate) fn normalize_record_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Mapping of relative file path to the modification time that was deployed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    version: u32,
    entries: BTreeMap<String, u64>,
}

impl Default for DeploymentRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl DeploymentRecord {
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            entries: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    pub fn set(&mut self, key: impl Into<String>, deployed: u64) {
        self.entries.insert(key.into(), deployed);
    }

    pub fn remove(&mut self, key: &str) -> Option<u64> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
