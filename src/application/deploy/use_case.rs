//! Deploy Use Case
//!
//! Orchestrates a deploy run:
//! 1. Open both change trackers (reset them unread in force mode)
//! 2. Upload the generic module root to staging
//! 3. Walk the entities root once, routing REST directories and entity
//!    definitions
//! 4. Invalidate the staging flow cache
//!
//! Any error aborts the run before invalidation. Records flushed before the
//! error stay valid, so a re-run resumes where this one stopped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{
    ArtifactFinder, CacheInvalidator, ContentStore, DeployEvent, DeployEventSink,
    DeploymentRecordRepository, FileSystem, FinderKind, ModuleStore, NoopEventSink,
};
use crate::domain::services::{ChangeTracker, ProjectLayout};
use crate::domain::value_objects::{DeployChannel, DirectoryRole, Target};
use crate::error::{HubloadError, HubloadResult};

use super::options::DeployOptions;
use super::result::{DeployResult, WalkOutcome};
use super::transformer::EntityDocumentTransformer;
use super::uploader::ModuleUploader;

/// Remote collaborators of a deploy run
pub struct TargetStores {
    pub staging_modules: Box<dyn ModuleStore>,
    pub final_modules: Box<dyn ModuleStore>,
    pub final_content: Box<dyn ContentStore>,
    pub invalidator: Box<dyn CacheInvalidator>,
}

impl TargetStores {
    pub fn modules_for(&self, target: Target) -> &dyn ModuleStore {
        match target {
            Target::Staging => self.staging_modules.as_ref(),
            Target::Final => self.final_modules.as_ref(),
        }
    }
}

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can substitute in-memory doubles.
pub struct DeployUseCase<FS, RR, AF>
where
    FS: FileSystem,
    RR: DeploymentRecordRepository,
    AF: ArtifactFinder,
{
    file_system: FS,
    record_repo: RR,
    finder: AF,
    stores: TargetStores,
}

/// Per-run collaborators shared by the walk steps
struct RunContext<'a, FS, AF>
where
    FS: FileSystem,
    AF: ArtifactFinder,
{
    layout: &'a ProjectLayout,
    uploader: ModuleUploader<'a, FS, AF>,
    transformer: EntityDocumentTransformer<'a, FS, AF>,
    event_sink: &'a dyn DeployEventSink,
}

impl<FS, RR, AF> DeployUseCase<FS, RR, AF>
where
    FS: FileSystem,
    RR: DeploymentRecordRepository,
    AF: ArtifactFinder,
{
    pub fn new(file_system: FS, record_repo: RR, finder: AF, stores: TargetStores) -> Self {
        Self {
            file_system,
            record_repo,
            finder,
            stores,
        }
    }

    pub fn stores(&self) -> &TargetStores {
        &self.stores
    }

    /// Execute a deploy run silently
    pub fn execute(&self, options: &DeployOptions) -> HubloadResult<DeployResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute a deploy run, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> HubloadResult<DeployResult> {
        let layout = &options.layout;
        let _span = tracing::info_span!("deploy", project = %layout.project_root().display())
            .entered();

        event_sink.on_event(DeployEvent::Started {
            project_root: layout.project_root().to_path_buf(),
            force: options.force,
            dry_run: options.dry_run,
        });

        match self.run(options, event_sink.as_ref()) {
            Ok(result) => {
                event_sink.on_event(DeployEvent::Completed {
                    uploaded_count: result.uploaded.len(),
                    skipped_count: result.skipped.len(),
                    entity_document_count: result.entity_documents.len(),
                    cache_invalidated: result.cache_invalidated,
                });
                Ok(result)
            }
            Err(err) => {
                event_sink.on_event(DeployEvent::Failed {
                    kind: err.kind(),
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn run(
        &self,
        options: &DeployOptions,
        event_sink: &dyn DeployEventSink,
    ) -> HubloadResult<DeployResult> {
        let layout = &options.layout;
        let mut result = DeployResult {
            dry_run: options.dry_run,
            ..DeployResult::new()
        };

        let mut modules = self.open_tracker(DeployChannel::Modules, options, event_sink)?;
        let mut content = self.open_tracker(DeployChannel::Content, options, event_sink)?;

        let ctx = RunContext {
            layout,
            uploader: ModuleUploader::new(
                &self.file_system,
                &self.finder,
                layout.plugins_root(),
                options.dry_run,
                event_sink,
            ),
            transformer: EntityDocumentTransformer::new(
                &self.file_system,
                &self.finder,
                &options.entity_collection,
                options.dry_run,
                event_sink,
            ),
            event_sink,
        };

        if self.file_system.is_dir(layout.plugins_root()) {
            let count = ctx.uploader.upload(
                layout.plugins_root(),
                FinderKind::GenericModules,
                self.stores.staging_modules.as_ref(),
                &mut modules,
                &mut result,
            )?;
            tracing::info!(uploaded = count, "generic modules deployed");
        } else {
            tracing::info!(
                plugins_root = %layout.plugins_root().display(),
                "plugins directory not found; no generic modules"
            );
        }

        let entities_root = layout.entities_root();
        if !self.file_system.is_dir(entities_root) {
            event_sink.on_event(DeployEvent::WalkSkipped {
                entities_root: entities_root.to_path_buf(),
            });
            result.walk = WalkOutcome::EntitiesRootMissing;
            return Ok(result);
        }

        self.walk(&ctx, entities_root, &mut content, &mut result)?;
        result.walk = WalkOutcome::Completed;

        if options.dry_run {
            return Ok(result);
        }

        match self.stores.invalidator.invalidate(Target::Staging) {
            Ok(()) => {
                event_sink.on_event(DeployEvent::CacheInvalidated {
                    target: Target::Staging,
                });
                result.cache_invalidated = true;
            }
            Err(err) => {
                event_sink.on_event(DeployEvent::CacheInvalidationFailed {
                    target: Target::Staging,
                    error: err.to_string(),
                });
                result.invalidation_error = Some(err.to_string());
            }
        }

        Ok(result)
    }

    /// Depth-first walk below `entities_root`, children in name order.
    fn walk(
        &self,
        ctx: &RunContext<'_, FS, AF>,
        entities_root: &Path,
        content: &mut ChangeTracker<'_>,
        result: &mut DeployResult,
    ) -> HubloadResult<()> {
        let mut pending: Vec<PathBuf> = self.children(entities_root)?;
        pending.reverse();

        while let Some(directory) = pending.pop() {
            let role = ctx.layout.role_of(&directory);
            if self.visit(ctx, &directory, role, content, result)? {
                let mut children = self.children(&directory)?;
                children.reverse();
                pending.extend(children);
            }
        }

        Ok(())
    }

    /// Act on one directory; returns whether its children should be walked.
    fn visit(
        &self,
        ctx: &RunContext<'_, FS, AF>,
        directory: &Path,
        role: DirectoryRole,
        content: &mut ChangeTracker<'_>,
        result: &mut DeployResult,
    ) -> HubloadResult<bool> {
        match role {
            DirectoryRole::RestInput
            | DirectoryRole::RestHarmonize
            | DirectoryRole::UnroutedRest => {
                let target = role.target();
                ctx.event_sink.on_event(DeployEvent::RestDirectory {
                    path: directory.to_path_buf(),
                    role,
                    target,
                });
                result.rest_directories.push((directory.to_path_buf(), role));
                if let Some(target) = target {
                    ctx.uploader.upload(
                        directory,
                        FinderKind::AllButBinary,
                        self.stores.modules_for(target),
                        content,
                        result,
                    )?;
                }
                Ok(false)
            }
            DirectoryRole::EntityDefinitionsLeaf => {
                ctx.transformer
                    .transform(directory, self.stores.final_content.as_ref(), result)?;
                Ok(true)
            }
            DirectoryRole::GenericModuleRoot | DirectoryRole::Unclassified => Ok(true),
        }
    }

    /// Tracker for `channel`. In force mode the persisted record is never
    /// read, so a corrupt or outdated file cannot block the run.
    fn open_tracker(
        &self,
        channel: DeployChannel,
        options: &DeployOptions,
        event_sink: &dyn DeployEventSink,
    ) -> HubloadResult<ChangeTracker<'_>> {
        let project_root = options.layout.project_root();
        if !options.force {
            return Ok(ChangeTracker::open(&self.record_repo, channel, project_root)?);
        }

        let tracker = if options.dry_run {
            ChangeTracker::fresh(&self.record_repo, channel, project_root)
        } else {
            ChangeTracker::reset(&self.record_repo, channel, project_root)?
        };
        event_sink.on_event(DeployEvent::ChannelReset { channel });
        Ok(tracker)
    }

    /// Subdirectories the walk may enter: hidden and ignored ones are skipped
    /// just as the finder skips them.
    fn children(&self, directory: &Path) -> HubloadResult<Vec<PathBuf>> {
        let mut dirs = self
            .file_system
            .list_dirs(directory)
            .map_err(|source| HubloadError::Traversal {
                path: directory.to_path_buf(),
                source,
            })?;
        dirs.retain(|dir| self.finder.admits_directory(dir));
        Ok(dirs)
    }
}
