//! Command handlers for the hubload binary

pub mod classify;
pub mod deploy;
pub mod project_root;
pub mod reset;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hubload::config::{Config, ConfigWarning};

/// Project root and configuration shared by every command
pub struct CommandContext {
    pub project_root: PathBuf,
    pub config: Config,
    pub json: bool,
    pub verbose: u8,
}

impl CommandContext {
    pub fn load(project: Option<&Path>, json: bool, verbose: u8) -> Result<Self> {
        let project_root = match project {
            Some(dir) => dir.to_path_buf(),
            None => {
                let cwd = std::env::current_dir().context("cannot read current directory")?;
                project_root::discover_project_root(&cwd)
            }
        };

        let (config, warnings) = Config::load_for_project(&project_root)
            .with_context(|| format!("loading configuration for {}", project_root.display()))?;
        report_warnings(&warnings);

        Ok(Self {
            project_root,
            config,
            json,
            verbose,
        })
    }
}

fn report_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}
