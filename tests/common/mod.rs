//! Shared testing utilities for holmes CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Default config location under the emulated home.
    pub fn config_path(&self) -> PathBuf {
        self.home().join(".config").join("holmes").join("config.toml")
    }

    /// Write `config.toml` at the default location.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config directory");
        fs::write(path, content).expect("Failed to write config");
    }

    /// Config pointing at a (mock) GitLab instance with the given token.
    pub fn write_gitlab_config(&self, url: &str, token: &str) {
        self.write_config(&format!("[gitlab]\nurl = \"{url}\"\ntoken = \"{token}\"\ntimeout_secs = 5\n"));
    }

    /// Build a command for invoking the compiled `holmes` binary with the emulated home.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("holmes").expect("Failed to locate holmes binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("HOLMES_CONFIG")
            .env_remove("HOLMES_GITLAB_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }
}
