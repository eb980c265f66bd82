//! Domain Services
//!
//! Stateless (or self-contained) business logic:
//! - `classifier` - Directory roles from path segments
//! - `change_tracker` - Incremental deploy decisions per channel

mod change_tracker;
mod classifier;

pub use change_tracker::ChangeTracker;
pub use classifier::{
    classify, ProjectLayout, HARMONIZE_SEGMENT, INPUT_SEGMENT, REST_DIR,
};
