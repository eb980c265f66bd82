//! Deploy Module
//!
//! Orchestrates a deploy run.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `uploader` - Incremental module upload (`ModuleUploader`)
//! - `transformer` - Entity definitions to content documents
//! - `use_case` - The routing walk (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use hubload::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(fs, records, finder, stores);
//! let result = use_case.execute(&DeployOptions::new(layout))?;
//! ```

mod options;
mod result;
mod transformer;
mod uploader;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployResult, UploadedModule, WalkOutcome};
pub use transformer::EntityDocumentTransformer;
pub use uploader::ModuleUploader;
pub use use_case::{DeployUseCase, TargetStores};
