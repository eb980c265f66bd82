//! Test environment builder for isolated hubload testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a hubload CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not a JSON line: {l}\n{e}\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated project plus a private HOME, so user config never leaks in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        }
    }

    /// Project pre-populated with `files` (relative path, content)
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let env = Self::new();
        for (path, content) in files {
            env.write_project_file(path, content);
        }
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Path of a module in the default directory store of `tier`
    pub fn module_path(&self, tier: &str, uri: &str) -> PathBuf {
        self.project_path(&format!(".hubload/{}/modules{}", tier, uri))
    }

    /// Path of a content document in the default final store
    pub fn document_path(&self, uri: &str) -> PathBuf {
        self.project_path(&format!(".hubload/final/content{}", uri))
    }

    pub fn cache_generation(&self) -> u64 {
        std::fs::read_to_string(self.project_path(".hubload/staging/cache-generation"))
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Run hubload in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hubload"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("HUBLOAD_LOG")
            .env_remove("HUBLOAD_PLUGINS_DIR")
            .env_remove("HUBLOAD_STATE_DIR")
            .env_remove("HUBLOAD_STAGING_ROOT")
            .env_remove("HUBLOAD_FINAL_ROOT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute hubload");
        output_to_result(output)
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content);
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Push a file's modification time into the future
    pub fn touch_later(&self, relative_path: &str) {
        let file = std::fs::File::options()
            .write(true)
            .open(self.project_path(relative_path))
            .expect("Failed to open file");
        file.set_modified(std::time::SystemTime::now() + std::time::Duration::from_secs(60))
            .expect("Failed to set mtime");
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
