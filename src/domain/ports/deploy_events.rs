//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{DeployChannel, DirectoryRole, Target};

/// Event emitted during deploy operations
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        project_root: PathBuf,
        force: bool,
        dry_run: bool,
    },

    /// A channel's deployment record was discarded (force mode)
    ChannelReset { channel: DeployChannel },

    /// Module transmitted to a target's module store
    ModuleUploaded {
        target: Target,
        channel: DeployChannel,
        uri: String,
        path: PathBuf,
    },

    /// Module left alone because it is up to date
    ModuleSkipped {
        channel: DeployChannel,
        path: PathBuf,
    },

    /// A REST directory was recognized; its subtree will not be walked
    RestDirectory {
        path: PathBuf,
        role: DirectoryRole,
        target: Option<Target>,
    },

    /// Entity definition written to the final content store
    EntityDocumentWritten { uri: String, path: PathBuf },

    /// The entities root does not exist; walk and invalidation skipped
    WalkSkipped { entities_root: PathBuf },

    /// Cache invalidation signal delivered
    CacheInvalidated { target: Target },

    /// Cache invalidation signal failed (the deployment itself stands)
    CacheInvalidationFailed { target: Target, error: String },

    /// The run aborted on a fatal error
    Failed { kind: &'static str, error: String },

    /// Deploy completed
    Completed {
        uploaded_count: usize,
        skipped_count: usize,
        entity_document_count: usize,
        cache_invalidated: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `TracingEventSink`: forwards events to the `tracing` subscriber
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
