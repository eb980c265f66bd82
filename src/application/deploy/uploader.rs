//! Module Uploader
//!
//! Uploads every out-of-date artifact under a directory to one target's
//! module store and records what was sent.

use std::path::Path;

use crate::domain::entities::Artifact;
use crate::domain::ports::{
    ArtifactFinder, DeployEvent, DeployEventSink, FileSystem, FinderKind, ModuleStore,
};
use crate::domain::services::ChangeTracker;
use crate::domain::value_objects::ModuleUri;
use crate::error::{HubloadError, HubloadResult};

use super::result::{DeployResult, UploadedModule};

pub struct ModuleUploader<'a, FS, AF>
where
    FS: FileSystem,
    AF: ArtifactFinder,
{
    file_system: &'a FS,
    finder: &'a AF,
    module_root: &'a Path,
    dry_run: bool,
    event_sink: &'a dyn DeployEventSink,
}

impl<'a, FS, AF> ModuleUploader<'a, FS, AF>
where
    FS: FileSystem,
    AF: ArtifactFinder,
{
    /// `module_root` is the directory module URIs are relative to.
    pub fn new(
        file_system: &'a FS,
        finder: &'a AF,
        module_root: &'a Path,
        dry_run: bool,
        event_sink: &'a dyn DeployEventSink,
    ) -> Self {
        Self {
            file_system,
            finder,
            module_root,
            dry_run,
            event_sink,
        }
    }

    /// Upload the artifacts `finder` selects under `directory`.
    ///
    /// Stops at the first failure. The tracker is flushed either way, so
    /// artifacts sent before the failure stay recorded.
    pub fn upload(
        &self,
        directory: &Path,
        kind: FinderKind,
        store: &dyn ModuleStore,
        tracker: &mut ChangeTracker<'_>,
        report: &mut DeployResult,
    ) -> HubloadResult<usize> {
        let artifacts = self.finder.find(directory, kind)?;
        tracing::debug!(
            directory = %directory.display(),
            target = %store.target(),
            channel = %tracker.channel(),
            candidates = artifacts.len(),
            "uploading modules"
        );

        let outcome = self.upload_all(&artifacts, store, tracker, report);
        let flushed = if self.dry_run {
            Ok(())
        } else {
            tracker.flush()
        };

        let count = outcome?;
        flushed?;
        Ok(count)
    }

    fn upload_all(
        &self,
        artifacts: &[Artifact],
        store: &dyn ModuleStore,
        tracker: &mut ChangeTracker<'_>,
        report: &mut DeployResult,
    ) -> HubloadResult<usize> {
        let detailed = self.event_sink.wants_detailed_events();
        let mut count = 0;

        for artifact in artifacts {
            let path = artifact.path();
            if !tracker.should_deploy(path, artifact.modified()) {
                if detailed {
                    self.event_sink.on_event(DeployEvent::ModuleSkipped {
                        channel: tracker.channel(),
                        path: path.to_path_buf(),
                    });
                }
                report.skipped.push(path.to_path_buf());
                continue;
            }

            let uri = ModuleUri::from_relative(self.module_root, path).ok_or_else(|| {
                HubloadError::PathEscape {
                    path: path.to_path_buf(),
                    root: self.module_root.to_path_buf(),
                }
            })?;

            if !self.dry_run {
                let content =
                    self.file_system
                        .read_bytes(path)
                        .map_err(|source| HubloadError::FileRead {
                            path: path.to_path_buf(),
                            source,
                        })?;
                store
                    .write_module(uri.as_str(), &content)
                    .map_err(|e| HubloadError::Transmission {
                        target: store.target(),
                        uri: uri.to_string(),
                        message: e.message().to_string(),
                    })?;
                tracker.record_deployed(path, artifact.modified());
            }

            if detailed {
                self.event_sink.on_event(DeployEvent::ModuleUploaded {
                    target: store.target(),
                    channel: tracker.channel(),
                    uri: uri.to_string(),
                    path: path.to_path_buf(),
                });
            }
            report.uploaded.push(UploadedModule {
                target: store.target(),
                channel: tracker.channel(),
                uri: uri.to_string(),
                path: path.to_path_buf(),
            });
            count += 1;
        }

        Ok(count)
    }
}
