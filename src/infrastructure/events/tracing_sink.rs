//! Tracing Event Sink
//!
//! Forwards deploy events to the `tracing` subscriber as structured records.

use crate::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl DeployEventSink for TracingEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                project_root,
                force,
                dry_run,
            } => tracing::info!(
                project_root = %project_root.display(),
                force,
                dry_run,
                "deploy started"
            ),
            DeployEvent::ChannelReset { channel } => {
                tracing::info!(%channel, "deployment record reset")
            }
            DeployEvent::ModuleUploaded {
                target,
                channel,
                uri,
                path,
            } => tracing::debug!(
                %target,
                %channel,
                %uri,
                path = %path.display(),
                "module uploaded"
            ),
            DeployEvent::ModuleSkipped { channel, path } => {
                tracing::trace!(%channel, path = %path.display(), "module up to date")
            }
            DeployEvent::RestDirectory { path, role, target } => match target {
                Some(target) => {
                    tracing::debug!(path = %path.display(), %role, %target, "REST directory")
                }
                None => tracing::warn!(
                    path = %path.display(),
                    "REST directory has no input or harmonize segment; skipped"
                ),
            },
            DeployEvent::EntityDocumentWritten { uri, path } => {
                tracing::debug!(%uri, path = %path.display(), "entity document written")
            }
            DeployEvent::WalkSkipped { entities_root } => tracing::info!(
                entities_root = %entities_root.display(),
                "entities directory not found; skipping entity walk"
            ),
            DeployEvent::CacheInvalidated { target } => {
                tracing::info!(%target, "flow cache invalidated")
            }
            DeployEvent::CacheInvalidationFailed { target, error } => {
                tracing::warn!(%target, %error, "flow cache invalidation failed")
            }
            DeployEvent::Failed { kind, error } => tracing::error!(kind, %error, "deploy failed"),
            DeployEvent::Completed {
                uploaded_count,
                skipped_count,
                entity_document_count,
                cache_invalidated,
            } => tracing::info!(
                uploaded = uploaded_count,
                skipped = skipped_count,
                entity_documents = entity_document_count,
                cache_invalidated,
                "deploy completed"
            ),
        }
    }
}
