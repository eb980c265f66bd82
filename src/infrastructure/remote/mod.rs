//! Target store implementations
//!
//! Concrete implementations of the remote store ports.

mod directory;

pub use directory::DirectoryStore;
