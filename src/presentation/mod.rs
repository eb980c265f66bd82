//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text rendering of command results
//!
//! ## Usage
//!
//! ```ignore
//! use hubload::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, &project_root)?;
//! let result = use_case.execute(&factory::create_deploy_options(&config, &project_root));
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::{create_deploy_options, create_deploy_use_case, create_reset_use_case};
pub use output::TextRenderer;
