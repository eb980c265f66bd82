//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::ENTITY_MODEL_COLLECTION;
use crate::domain::services::ProjectLayout;
use crate::domain::value_objects::Target;
use crate::error::HubloadResult;
use crate::infrastructure::DEFAULT_BINARY_EXTENSIONS;

use super::loader::{self, ConfigWarning};

/// Plugin tree and state locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: String,

    /// Relative to `plugins_dir`
    #[serde(default = "default_entities_dir")]
    pub entities_dir: String,

    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            plugins_dir: default_plugins_dir(),
            entities_dir: default_entities_dir(),
            state_dir: default_state_dir(),
        }
    }
}

fn default_plugins_dir() -> String {
    "plugins".to_string()
}

fn default_entities_dir() -> String {
    "entities".to_string()
}

fn default_state_dir() -> String {
    ".tmp".to_string()
}

/// Deploy behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Extra gitignore-style patterns, layered over `.hubignore`
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Extensions never sent from REST directories
    #[serde(default = "default_binary_extensions")]
    pub binary_extensions: Vec<String>,

    #[serde(default = "default_entity_collection")]
    pub entity_collection: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            binary_extensions: default_binary_extensions(),
            entity_collection: default_entity_collection(),
        }
    }
}

fn default_binary_extensions() -> Vec<String> {
    DEFAULT_BINARY_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_entity_collection() -> String {
    ENTITY_MODEL_COLLECTION.to_string()
}

/// Where one target tier is materialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TierConfig {
    /// Relative paths resolve against the project root
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub staging: TierConfig,

    #[serde(default, rename = "final")]
    pub final_tier: TierConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HubloadResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HubloadResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// `HUBLOAD_*` overrides.
    pub fn load_for_project(project_root: &Path) -> HubloadResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_project(project_root)
    }

    /// Apply environment variable overrides (HUBLOAD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn project_layout(&self, project_root: &Path) -> ProjectLayout {
        ProjectLayout::new(
            project_root,
            &self.layout.plugins_dir,
            &self.layout.entities_dir,
        )
    }

    pub fn state_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.layout.state_dir)
    }

    /// Resolved root of the directory store backing `target`
    pub fn tier_root(&self, project_root: &Path, target: Target) -> PathBuf {
        let (configured, fallback) = match target {
            Target::Staging => (&self.staging.root, ".hubload/staging"),
            Target::Final => (&self.final_tier.root, ".hubload/final"),
        };
        match configured {
            Some(root) => project_root.join(root),
            None => project_root.join(fallback),
        }
    }
}
