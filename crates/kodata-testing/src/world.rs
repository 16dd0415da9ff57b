//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated site directory
//! - Publishing snapshot documents into it
//! - Executing CLI commands against that site

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use kodata_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_document(fixtures::CATALOG, &fixtures::sample_catalog());
///
/// let result = world.run(&["catalog"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    site_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an empty site. Every page fails until documents are published.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let site_dir = temp_dir.path().join("site");
        std::fs::create_dir_all(site_dir.join("data")).expect("Failed to create site dir");

        Self {
            config_path: temp_dir.path().join("config.toml"),
            site_dir,
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    /// A site with all four sample documents published
    pub fn with_sample_site() -> Self {
        Self::new()
            .with_document(fixtures::CATALOG, &fixtures::sample_catalog())
            .with_document(fixtures::STATISTICS, &fixtures::sample_statistics())
            .with_document(fixtures::CHANGELOG, &fixtures::sample_changelog())
            .with_document(fixtures::TRENDS, &fixtures::sample_trends())
    }

    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Config file passed via `--config`; absent unless written
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Publish a JSON document at `resource` (relative to the site root)
    pub fn with_document(self, resource: &str, document: &Value) -> Self {
        let body = serde_json::to_string_pretty(document).expect("Failed to encode document");
        self.with_raw_document(resource, &body)
    }

    /// Publish raw bytes, e.g. a truncated document
    pub fn with_raw_document(self, resource: &str, body: &str) -> Self {
        let path = self.site_dir.join(resource);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create document dir");
        }
        std::fs::write(&path, body).expect("Failed to write document");
        self
    }

    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("kodata")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--site")
            .arg(&self.site_dir)
            .arg("--config")
            .arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// Uses `Command::cargo_bin()`, which relies on the binary having been
    /// built by `cargo test`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("kodata")
            .map_err(|e| anyhow::anyhow!("Failed to find kodata binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
