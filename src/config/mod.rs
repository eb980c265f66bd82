//! Configuration module for hubload
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HUBLOAD_*)
//! 3. Project config (`<project>/hubload.toml`)
//! 4. User config (`~/.config/hubload/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DeployConfig, LayoutConfig, TierConfig};
