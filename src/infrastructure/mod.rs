//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `finder/` - Artifact discovery with ignore rules
//! - `repositories/` - Deployment record persistence
//! - `remote/` - Target stores
//! - `events/` - Deploy event sinks

pub mod events;
pub mod finder;
pub mod fs;
pub mod remote;
pub mod repositories;

pub use events::{JsonEventSink, TracingEventSink};
pub use finder::{FsArtifactFinder, DEFAULT_BINARY_EXTENSIONS};
pub use fs::LocalFs;
pub use remote::DirectoryStore;
pub use repositories::TomlRecordRepository;
