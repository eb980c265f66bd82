//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod channel;
mod directory_role;
mod ignore_patterns;
mod module_uri;
mod target;

pub use channel::DeployChannel;
pub use directory_role::DirectoryRole;
pub use ignore_patterns::{IgnoreError, IgnorePatterns, IGNORE_FILE_NAME};
pub use module_uri::ModuleUri;
pub use target::Target;
