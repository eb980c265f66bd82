//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HubloadError, HubloadResult};

use super::types::Config;

/// Project configuration file, at the project root
pub const PROJECT_CONFIG_FILE: &str = "hubload.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HubloadResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HubloadError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing of project config and user config, else defaults.
///
/// A config file that exists but does not parse is an error rather than a
/// silent fallback.
pub fn load_for_project(project_root: &Path) -> HubloadResult<(Config, Vec<ConfigWarning>)> {
    let candidates = std::iter::once(project_root.join(PROJECT_CONFIG_FILE))
        .chain(user_config_path());

    for path in candidates {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((config.with_env_overrides(), warnings));
        }
    }

    Ok((Config::default().with_env_overrides(), Vec::new()))
}

/// `~/.config/hubload/config.toml` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hubload").join("config.toml"))
}

/// Apply `HUBLOAD_*` overrides read through `lookup`.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(dir) = non_empty("HUBLOAD_PLUGINS_DIR") {
        config.layout.plugins_dir = dir;
    }
    if let Some(dir) = non_empty("HUBLOAD_STATE_DIR") {
        config.layout.state_dir = dir;
    }
    if let Some(root) = non_empty("HUBLOAD_STAGING_ROOT") {
        config.staging.root = Some(PathBuf::from(root));
    }
    if let Some(root) = non_empty("HUBLOAD_FINAL_ROOT") {
        config.final_tier.root = Some(PathBuf::from(root));
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "layout",
        "plugins_dir",
        "entities_dir",
        "state_dir",
        "deploy",
        "ignore",
        "binary_extensions",
        "entity_collection",
        "staging",
        "final",
        "root",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
