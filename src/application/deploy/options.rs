//! Deploy Options
//!
//! Configuration types for deploy operations.

use crate::domain::entities::ENTITY_MODEL_COLLECTION;
use crate::domain::services::ProjectLayout;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Resolved project, plugins and entities locations
    pub layout: ProjectLayout,
    /// Discard both deployment records before the run
    pub force: bool,
    /// Report what would be deployed without writing or recording anything
    pub dry_run: bool,
    /// Collection entity model documents are tagged with
    pub entity_collection: String,
}

impl DeployOptions {
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            force: false,
            dry_run: false,
            entity_collection: ENTITY_MODEL_COLLECTION.to_string(),
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_entity_collection(mut self, collection: impl Into<String>) -> Self {
        self.entity_collection = collection.into();
        self
    }
}
