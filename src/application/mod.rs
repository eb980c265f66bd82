//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Generic module upload, entities walk, cache invalidation
//! - `ResetUseCase` - Clears persisted deployment records

pub mod deploy;
pub mod reset;

pub use deploy::{
    DeployOptions, DeployResult, DeployUseCase, TargetStores, UploadedModule, WalkOutcome,
};
pub use reset::{ClearedChannel, ResetResult, ResetUseCase};
