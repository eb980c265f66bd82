//! hubload - incremental deployer for data hub plugin trees
//!
//! Sends a project's `plugins` tree to two remote tiers: generic modules and
//! input-flow REST extensions to staging, harmonize-flow REST extensions and
//! entity model documents to final. Only artifacts changed since their last
//! deployment are sent, and the staging flow cache is invalidated after a
//! complete run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployResult, DeployUseCase, ResetUseCase, TargetStores};
pub use config::Config;
pub use domain::services::{classify, ProjectLayout};
pub use domain::value_objects::{DeployChannel, DirectoryRole, Target};
pub use error::{HubloadError, HubloadResult};
