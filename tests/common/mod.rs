//! Common test utilities for Trellis integration tests.
//!
//! - `TestEnv`: isolated site directory and config home, plus a runner for the
//!   `trellis` binary
//! - `SITE_FILES`: the reference template tree used across suites

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Reference site: three layout levels, a layout-less directory, a
/// non-template file, and the `app`/`apple` prefix pair.
pub const SITE_FILES: &[&str] = &[
    "index.html",
    "layout.html",
    "about.html",
    "file.txt",
    "app/layout.html",
    "app/index.html",
    "app/settings/index.html",
    "app/settings/layout.html",
    "app/settings/profile/index.html",
    "apple/index.html",
    "blog/post.html",
    "blog/2024/new-year.html",
];

/// Result of running the trellis binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Site tree handed to the binary as ROOT
    pub site: TempDir,
    /// Stands in for the user config directory
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            site: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
        }
    }

    /// Environment seeded with [`SITE_FILES`]
    pub fn with_site() -> Self {
        let env = Self::new();
        for file in SITE_FILES {
            env.write_file(file, "");
        }
        env
    }

    pub fn site_path(&self, relative: &str) -> PathBuf {
        self.site.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.site_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn make_dir(&self, relative: &str) {
        fs::create_dir_all(self.site_path(relative)).unwrap();
    }

    /// Write `<config_home>/trellis/config.toml`
    pub fn write_user_config(&self, content: &str) {
        let dir = self.config_home.path().join("trellis");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }

    /// Run `trellis` with the site directory as working directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_in(self.site.path(), self.config_home.path(), args, env_vars)
    }
}

fn run_in(cwd: &Path, config_home: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trellis"));
    cmd.current_dir(cwd)
        .args(args)
        .env("TRELLIS_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG");
    for key in [
        "TRELLIS_EXTENSION",
        "TRELLIS_LAYOUT_NAME",
        "TRELLIS_DIRECTORY",
        "TRELLIS_STRATEGY",
        "TRELLIS_WALK_ORDER",
        "TRELLIS_SKIP_UNREADABLE",
        "TRELLIS_FORMAT",
        "TRELLIS_VERBOSITY",
    ] {
        cmd.env_remove(key);
    }
    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Owned chain from string literals
pub fn chain(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
