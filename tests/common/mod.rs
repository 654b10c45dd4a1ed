//! Common test utilities for Comanda CLI tests.
//!
//! Provides `TestEnv`: an isolated data directory and home directory plus a
//! helper to run the `comanda` binary against them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running a Comanda CLI command
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

    /// Parse the single NDJSON event written by a `--json` command
    pub fn json(&self) -> serde_json::Value {
        let line = self
            .stdout
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_else(|| panic!("no JSON output:\n{}", self.combined_output()));
        serde_json::from_str(line).unwrap()
    }
}

/// Isolated environment: data files go under `data_dir`, config lookups
/// under `home_dir`, never the developer's real directories.
pub struct TestEnv {
    pub data_dir: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    pub fn dishes_dir(&self) -> PathBuf {
        self.data_path("restaurant/platillos")
    }

    pub fn orders_dir(&self) -> PathBuf {
        self.data_path("restaurant/ordenes")
    }

    /// Run comanda with `--data-dir` pointing at this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut full = vec!["--data-dir", self.data_dir.path().to_str().unwrap()];
        full.extend_from_slice(args);
        self.run_raw(self.data_dir.path(), &full)
    }

    /// Run comanda from `cwd` with exactly `args`
    pub fn run_raw(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_comanda"))
            .args(args)
            .current_dir(cwd)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("COMANDA_DATA_DIR")
            .env_remove("COMANDA_VERBOSITY")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .output()
            .expect("failed to run comanda");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn add_dish(&self, id: &str, name: &str, price: &str, category: &str) {
        let result = self.run(&[
            "dish", "add", id, "--name", name, "--price", price, "--category", category,
        ]);
        assert!(result.success, "dish add failed:\n{}", result.combined_output());
    }

    /// Names of the ticket files currently on disk, sorted
    pub fn ticket_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.orders_dir())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
