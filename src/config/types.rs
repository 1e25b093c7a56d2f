//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::GroupOptions;
use crate::domain::value_objects::{LayoutQuery, ResolveStrategy, WalkOrder};
use crate::error::TrellisResult;

use super::loader::{self, ConfigWarning};

/// What to resolve and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Extension of template files, without the dot; empty disables filtering
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Stem name of layout files
    #[serde(default = "default_layout_name")]
    pub layout_name: String,

    /// Only report content files whose stem starts with this prefix
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default)]
    pub strategy: ResolveStrategy,

    #[serde(default)]
    pub walk_order: WalkOrder,

    /// Skip unreadable directories instead of failing
    #[serde(default)]
    pub skip_unreadable: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            layout_name: default_layout_name(),
            directory: default_directory(),
            strategy: ResolveStrategy::default(),
            walk_order: WalkOrder::default(),
            skip_unreadable: false,
        }
    }
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_layout_name() -> String {
    "layout".to_string()
}

fn default_directory() -> String {
    ".".to_string()
}

impl ResolveConfig {
    pub fn query(&self) -> LayoutQuery {
        LayoutQuery::new(self.extension.as_str(), self.layout_name.as_str())
            .with_directory(self.directory.as_str())
    }

    pub fn group_options(&self) -> GroupOptions {
        GroupOptions {
            strategy: self.strategy,
            walk_order: self.walk_order,
            skip_unreadable: self.skip_unreadable,
            ..GroupOptions::default()
        }
    }
}

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "debug" => Ok(Verbosity::Debug),
            other => Err(format!("unknown verbosity '{}'", other)),
        }
    }
}

impl Verbosity {
    /// Raise the level by the number of `-v` flags given on the command line.
    pub fn raised_by(self, count: u8) -> Self {
        let level = match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        } + count as usize;
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
            Verbosity::Debug => "trace",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TrellisResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TrellisResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Find the project or user config file, then apply env overrides.
    pub fn discover(project_root: Option<&Path>) -> TrellisResult<(Self, Vec<ConfigWarning>)> {
        let (config, warnings) = loader::discover(project_root)?;
        Ok((config.with_env_overrides(), warnings))
    }

    /// Apply environment variable overrides (TRELLIS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
