//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename, so readers never observe a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }

    fn list_dirs(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::at(path, e))? {
            let entry = entry.map_err(|e| FsError::at(path, e))?;
            let file_type = entry.file_type().map_err(|e| FsError::at(&entry.path(), e))?;
            if file_type.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

/// Write `content` to `path` via temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
    temp.write_all(content).map_err(|e| FsError::at(path, e))?;
    temp.flush().map_err(|e| FsError::at(path, e))?;
    temp.persist(path)
        .map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}

/// Modification time of `path` in milliseconds since the Unix epoch.
pub fn modified_millis(path: &Path) -> FsResult<u64> {
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| FsError::at(path, e))?;
    let since_epoch = modified
        .duration_since(UNIX_EPOCH)
        .map_err(|e| FsError::Other(format!("{}: {}", path.display(), e)))?;
    Ok(since_epoch.as_millis() as u64)
}
