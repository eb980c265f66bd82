//! Change tracking service
//!
//! Decides whether an artifact needs to be deployed by comparing its
//! modification time with the one recorded at its last deployment. One
//! tracker exists per `DeployChannel`.

use std::path::{Path, PathBuf};

use crate::domain::entities::{normalize_record_path, DeploymentRecord};
use crate::domain::ports::{DeploymentRecordRepository, RecordStoreError};
use crate::domain::value_objects::DeployChannel;

pub struct ChangeTracker<'a> {
    channel: DeployChannel,
    repository: &'a dyn DeploymentRecordRepository,
    project_root: PathBuf,
    record: DeploymentRecord,
    dirty: bool,
}

impl<'a> ChangeTracker<'a> {
    /// Load the persisted record of `channel`.
    ///
    /// Keys are stored relative to `project_root` so a moved checkout keeps
    /// its history.
    pub fn open(
        repository: &'a dyn DeploymentRecordRepository,
        channel: DeployChannel,
        project_root: impl Into<PathBuf>,
    ) -> Result<Self, RecordStoreError> {
        let record = repository.load(channel)?;
        Ok(Self {
            channel,
            repository,
            project_root: project_root.into(),
            record,
            dirty: false,
        })
    }

    /// Start `channel` with no history, without reading the persisted record.
    pub fn fresh(
        repository: &'a dyn DeploymentRecordRepository,
        channel: DeployChannel,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            channel,
            repository,
            project_root: project_root.into(),
            record: DeploymentRecord::new(),
            dirty: false,
        }
    }

    /// Discard the whole history of `channel`, persisted file included.
    ///
    /// The record is deleted unread, so a corrupt or outdated file is no
    /// obstacle.
    pub fn reset(
        repository: &'a dyn DeploymentRecordRepository,
        channel: DeployChannel,
        project_root: impl Into<PathBuf>,
    ) -> Result<Self, RecordStoreError> {
        repository.delete(channel)?;
        Ok(Self::fresh(repository, channel, project_root))
    }

    pub fn channel(&self) -> DeployChannel {
        self.channel
    }

    fn key(&self, path: &Path) -> String {
        normalize_record_path(path.strip_prefix(&self.project_root).unwrap_or(path))
    }

    /// True when `path` was never deployed or changed since it was.
    pub fn should_deploy(&self, path: &Path, modified: u64) -> bool {
        match self.record.get(&self.key(path)) {
            Some(deployed) => modified > deployed,
            None => true,
        }
    }

    pub fn record_deployed(&mut self, path: &Path, modified: u64) {
        let key = self.key(path);
        if self.record.get(&key) != Some(modified) {
            self.record.set(key, modified);
            self.dirty = true;
        }
    }

    /// Persist pending changes.
    pub fn flush(&mut self) -> Result<(), RecordStoreError> {
        if self.dirty {
            self.repository.save(self.channel, &self.record)?;
            self.dirty = false;
        }
        Ok(())
    }

    pub fn tracked_count(&self) -> usize {
        self.record.len()
    }
}
