//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;

pub use local::{atomic_write, modified_millis, LocalFs};
