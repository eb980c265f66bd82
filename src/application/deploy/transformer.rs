//! Entity Document Transformer
//!
//! Wraps each file directly inside an entity definitions directory as a
//! content document tagged with the entity model collection. No change
//! tracking: documents are rewritten on every run.

use std::path::Path;

use crate::domain::entities::EntityDocument;
use crate::domain::ports::{
    ArtifactFinder, ContentStore, DeployEvent, DeployEventSink, FileSystem, FinderKind,
};
use crate::error::{HubloadError, HubloadResult};

use super::result::DeployResult;

pub struct EntityDocumentTransformer<'a, FS, AF>
where
    FS: FileSystem,
    AF: ArtifactFinder,
{
    file_system: &'a FS,
    finder: &'a AF,
    collection: &'a str,
    dry_run: bool,
    event_sink: &'a dyn DeployEventSink,
}

impl<'a, FS, AF> EntityDocumentTransformer<'a, FS, AF>
where
    FS: FileSystem,
    AF: ArtifactFinder,
{
    pub fn new(
        file_system: &'a FS,
        finder: &'a AF,
        collection: &'a str,
        dry_run: bool,
        event_sink: &'a dyn DeployEventSink,
    ) -> Self {
        Self {
            file_system,
            finder,
            collection,
            dry_run,
            event_sink,
        }
    }

    pub fn transform(
        &self,
        directory: &Path,
        store: &dyn ContentStore,
        report: &mut DeployResult,
    ) -> HubloadResult<usize> {
        let artifacts = self.finder.find(directory, FinderKind::EntityDefinitions)?;
        let mut count = 0;

        for artifact in &artifacts {
            let path = artifact.path();
            let body = self
                .file_system
                .read(path)
                .map_err(|source| HubloadError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            let document = EntityDocument::new(&artifact.file_name(), body, self.collection);

            if !self.dry_run {
                store
                    .write_document(document.uri(), document.body(), document.metadata())
                    .map_err(|e| HubloadError::Transmission {
                        target: store.target(),
                        uri: document.uri().to_string(),
                        message: e.message().to_string(),
                    })?;
            }

            if self.event_sink.wants_detailed_events() {
                self.event_sink.on_event(DeployEvent::EntityDocumentWritten {
                    uri: document.uri().to_string(),
                    path: path.to_path_buf(),
                });
            }
            report.entity_documents.push(document.uri().to_string());
            count += 1;
        }

        Ok(count)
    }
}
