//! Domain Layer
//!
//! Pure deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Artifact, DeploymentRecord, EntityDocument
//! - `value_objects/` - Target, DirectoryRole, DeployChannel, ModuleUri, IgnorePatterns
//! - `services/` - Classifier, ChangeTracker
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
