//! TOML Deployment Record Repository
//!
//! Persists one record file per channel under the project's state directory,
//! e.g. `.tmp/user-modules-deploy-timestamps.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::{DeploymentRecordRepository, RecordStoreError};
use crate::domain::value_objects::DeployChannel;
use crate::infrastructure::fs::LocalFs;

/// TOML representation of a record file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlRecord {
    version: u32,
    #[serde(default)]
    files: BTreeMap<String, u64>,
}

pub struct TomlRecordRepository {
    state_dir: PathBuf,
    fs: LocalFs,
}

impl TomlRecordRepository {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn path_for(&self, channel: DeployChannel) -> PathBuf {
        self.state_dir.join(channel.record_file_name())
    }

    fn lock_path(&self, channel: DeployChannel) -> PathBuf {
        self.path_for(channel).with_extension("lock")
    }

    fn io_error(path: &Path, message: impl ToString) -> RecordStoreError {
        RecordStoreError::Io {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

impl DeploymentRecordRepository for TomlRecordRepository {
    fn load(&self, channel: DeployChannel) -> Result<DeploymentRecord, RecordStoreError> {
        let path = self.path_for(channel);
        if !self.fs.exists(&path) {
            return Ok(DeploymentRecord::new());
        }

        let content = self
            .fs
            .read(&path)
            .map_err(|e| Self::io_error(&path, e))?;
        let toml_record: TomlRecord =
            toml::from_str(&content).map_err(|e| RecordStoreError::Corrupted {
                path: path.clone(),
                message: e.to_string(),
            })?;

        if toml_record.version != DeploymentRecord::VERSION {
            return Err(RecordStoreError::VersionMismatch {
                path,
                found: toml_record.version,
                expected: DeploymentRecord::VERSION,
            });
        }

        let mut record = DeploymentRecord::new();
        for (key, deployed) in toml_record.files {
            record.set(key, deployed);
        }
        Ok(record)
    }

    fn save(
        &self,
        channel: DeployChannel,
        record: &DeploymentRecord,
    ) -> Result<(), RecordStoreError> {
        let path = self.path_for(channel);
        let lock_path = self.lock_path(channel);
        fs::create_dir_all(&self.state_dir).map_err(|e| Self::io_error(&self.state_dir, e))?;

        let lock_file = fs::File::create(&lock_path).map_err(|e| Self::io_error(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Self::io_error(&lock_path, e))?;

        let toml_record = TomlRecord {
            version: record.version(),
            files: record
                .entries()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        };
        let result = toml::to_string_pretty(&toml_record)
            .map_err(|e| Self::io_error(&path, e))
            .and_then(|content| {
                self.fs
                    .write(&path, &content)
                    .map_err(|e| Self::io_error(&path, e))
            });

        let _ = lock_file.unlock();
        result
    }

    fn delete(&self, channel: DeployChannel) -> Result<(), RecordStoreError> {
        let path = self.path_for(channel);
        if self.fs.exists(&path) {
            self.fs
                .remove(&path)
                .map_err(|e| Self::io_error(&path, e))?;
        }
        Ok(())
    }
}
