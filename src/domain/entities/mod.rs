//! Domain Entities
//!
//! - `Artifact` - A deployable local file
//! - `DeploymentRecord` - Last deployed timestamp per file
//! - `EntityDocument` - An entity definition wrapped as a content document

mod artifact;
mod deploy_record;
mod entity_document;

pub use artifact::Artifact;
pub(crate) use deploy_record::normalize_record_path;
pub use deploy_record::DeploymentRecord;
pub use entity_document::{DocumentMetadata, EntityDocument, ENTITY_MODEL_COLLECTION};
