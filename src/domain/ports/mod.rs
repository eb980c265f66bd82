//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_finder;
pub mod deploy_events;
pub mod file_system;
pub mod record_repository;
pub mod remote_store;

pub use artifact_finder::{ArtifactFinder, FinderKind};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use record_repository::{DeploymentRecordRepository, RecordStoreError};
pub use remote_store::{CacheInvalidator, ContentStore, ModuleStore, StoreError};
