//! Remote store ports
//!
//! Connection handling, authentication and wire protocol live behind these
//! traits. Writes have overwrite semantics.

use thiserror::Error;

use crate::domain::entities::DocumentMetadata;
use crate::domain::value_objects::Target;

/// Remote write failure
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Code namespace of one target tier
pub trait ModuleStore {
    fn target(&self) -> Target;

    fn write_module(&self, uri: &str, content: &[u8]) -> Result<(), StoreError>;
}

/// Data namespace of a target tier
pub trait ContentStore {
    fn target(&self) -> Target;

    fn write_document(
        &self,
        uri: &str,
        content: &str,
        metadata: &DocumentMetadata,
    ) -> Result<(), StoreError>;
}

/// Out-of-band signal telling a tier to drop memoized flow definitions
pub trait CacheInvalidator {
    fn invalidate(&self, target: Target) -> Result<(), StoreError>;
}
