//! DeploymentRecordRepository port - persistence of deployment timestamps
//!
//! Allows the change tracker to load/save records without knowing
//! the on-disk format.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::DeploymentRecord;
use crate::domain::value_objects::DeployChannel;

/// Record store errors
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("failed to access deployment record {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("deployment record {path} is corrupted: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("deployment record {path} has version {found}, expected {expected}; run `hubload reset`")]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// Abstract repository for per-channel deployment records
pub trait DeploymentRecordRepository {
    /// Load the record for `channel`, or an empty one if none was persisted
    fn load(&self, channel: DeployChannel) -> Result<DeploymentRecord, RecordStoreError>;

    /// Persist the record for `channel`
    fn save(&self, channel: DeployChannel, record: &DeploymentRecord)
        -> Result<(), RecordStoreError>;

    /// Delete the persisted record for `channel` (no-op if absent)
    fn delete(&self, channel: DeployChannel) -> Result<(), RecordStoreError>;
}
