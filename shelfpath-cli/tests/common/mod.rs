//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate configuration
//! - Configuration fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that change configuration.
const CONFIG_VARS: &[&str] = &[
    "SHELFPATH_CONFIG_DIR",
    "SHELFPATH_OUTPUT_FORMAT",
    "SHELFPATH_REDIRECTS",
    "SHELFPATH_DISABLE_DEFAULT_REDIRECTS",
    "SHELFPATH_LOG_MODE",
];

/// A project configuration with a small collection tree, a redirect and an
/// embedding host.
#[allow(dead_code)]
pub const LIBRARY_CONFIG: &str = r#"
collections:
  - url_key: enabling-writers
    label: Enabling Writers
    children: [ew-nigeria, ew-ghana]
  - url_key: ew-nigeria
    label: Enabling Writers Nigeria
  - url_key: ew-ghana
    label: Enabling Writers Ghana
redirects:
  - from: /browse
    to: /enabling-writers
embeds:
  - url_key: embed-test
    collection_url_key: enabling-writers
  - url_key: switched-off
    collection_url_key: enabling-writers
    enabled: false
"#;

/// Test environment with an isolated working and configuration directory.
///
/// Commands run with the temporary directory as their working directory
/// and as `--config-dir`, so no user or project configuration leaks in.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Create a test environment whose project configuration is
    /// [`LIBRARY_CONFIG`].
    pub fn with_library() -> Self {
        let env = Self::new();
        env.write_project_config(LIBRARY_CONFIG);
        env
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Configuration environment variables are still cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("shelfpath").expect("Failed to find shelfpath binary");
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder running inside this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path)
            .arg("--config-dir")
            .arg(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `shelfpath.yaml` into the environment and return its path.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        self.write_file("shelfpath.yaml", contents)
    }

    /// Write a file into the environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
