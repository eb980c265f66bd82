//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{DeployOptions, DeployUseCase, ResetUseCase, TargetStores};
use crate::config::Config;
use crate::domain::value_objects::{IgnorePatterns, Target};
use crate::error::HubloadResult;
use crate::infrastructure::{DirectoryStore, FsArtifactFinder, LocalFs, TomlRecordRepository};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs, TomlRecordRepository, FsArtifactFinder>;

/// Type alias for the concrete ResetUseCase
pub type ConcreteResetUseCase = ResetUseCase<TomlRecordRepository>;

/// Directory stores for both tiers, rooted where `config` says
pub fn create_target_stores(config: &Config, project_root: &Path) -> TargetStores {
    let staging = DirectoryStore::new(
        Target::Staging,
        config.tier_root(project_root, Target::Staging),
    );
    let final_tier = DirectoryStore::new(
        Target::Final,
        config.tier_root(project_root, Target::Final),
    );

    TargetStores {
        staging_modules: Box::new(staging.clone()),
        final_modules: Box::new(final_tier.clone()),
        final_content: Box::new(final_tier),
        invalidator: Box::new(staging),
    }
}

/// Create a deploy use case with all dependencies wired up
///
/// Loads `.hubignore` from the project root, so an invalid ignore file
/// fails here rather than mid-run.
pub fn create_deploy_use_case(
    config: &Config,
    project_root: &Path,
) -> HubloadResult<ConcreteDeployUseCase> {
    let ignore = IgnorePatterns::load(project_root, &config.deploy.ignore)?;
    let finder = FsArtifactFinder::new(config.project_layout(project_root), ignore)
        .with_binary_extensions(config.deploy.binary_extensions.clone());

    Ok(DeployUseCase::new(
        LocalFs::new(),
        TomlRecordRepository::new(config.state_dir(project_root)),
        finder,
        create_target_stores(config, project_root),
    ))
}

/// Deploy options from configuration; flags are applied by the caller
pub fn create_deploy_options(config: &Config, project_root: &Path) -> DeployOptions {
    DeployOptions::new(config.project_layout(project_root))
        .with_entity_collection(config.deploy.entity_collection.clone())
}

pub fn create_reset_use_case(config: &Config, project_root: &Path) -> ConcreteResetUseCase {
    ResetUseCase::new(TomlRecordRepository::new(config.state_dir(project_root)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn stores_are_wired_to_their_tiers() {
        let stores = create_target_stores(&Config::default(), Path::new("/work/hub"));
        assert_eq!(stores.staging_modules.target(), Target::Staging);
        assert_eq!(stores.final_modules.target(), Target::Final);
        assert_eq!(stores.modules_for(Target::Final).target(), Target::Final);
    }

    #[test]
    fn deploy_use_case_rejects_invalid_ignore_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hubignore"), "a\n".repeat(1001)).unwrap();

        let result = create_deploy_use_case(&Config::default(), dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn deploy_options_carry_configured_collection() {
        let mut config = Config::default();
        config.deploy.entity_collection = "models".to_string();

        let options = create_deploy_options(&config, Path::new("/work/hub"));
        assert_eq!(options.entity_collection, "models");
        assert!(!options.force);
        assert!(!options.dry_run);
    }
}
