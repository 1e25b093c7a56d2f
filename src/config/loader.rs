//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{TrellisError, TrellisResult};
use crate::infrastructure::fs::trellis_config_dir;

use super::types::Config;

/// Project config file name, looked up in the walked root
pub const PROJECT_CONFIG_FILE: &str = "trellis.toml";

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
pub fn load_with_warnings(path: &Path) -> TrellisResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TrellisError::InvalidConfig {
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
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the first config file present, without env overrides.
///
/// Looks for `<project_root>/trellis.toml`, then the user config; falls back
/// to defaults when neither exists.
pub fn discover(project_root: Option<&Path>) -> TrellisResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(trellis_config_dir().map(|dir| dir.join("trellis/config.toml")));

    for path in candidates {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            return load_with_warnings(&path);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (TRELLIS_* prefix)
///
/// `lookup` returns the value of a variable, if set. Values that fail to
/// parse are logged and leave the configured setting untouched.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ext) = lookup("TRELLIS_EXTENSION") {
        config.resolve.extension = ext.trim().to_string();
    }

    if let Some(name) = lookup("TRELLIS_LAYOUT_NAME") {
        config.resolve.layout_name = name.trim().to_string();
    }

    if let Some(dir) = lookup("TRELLIS_DIRECTORY") {
        config.resolve.directory = dir.trim().to_string();
    }

    override_parsed(
        &mut config.resolve.strategy,
        "TRELLIS_STRATEGY",
        lookup("TRELLIS_STRATEGY"),
        "trie, chain-match, breadth-first",
    );
    override_parsed(
        &mut config.resolve.walk_order,
        "TRELLIS_WALK_ORDER",
        lookup("TRELLIS_WALK_ORDER"),
        "depth-first, breadth-first",
    );
    override_parsed(
        &mut config.resolve.skip_unreadable,
        "TRELLIS_SKIP_UNREADABLE",
        lookup("TRELLIS_SKIP_UNREADABLE").map(|raw| normalize_flag(&raw)),
        "true, false, 1, 0, yes, no, on, off",
    );
    override_parsed(
        &mut config.output.format,
        "TRELLIS_FORMAT",
        lookup("TRELLIS_FORMAT"),
        "text, json",
    );
    override_parsed(
        &mut config.output.verbosity,
        "TRELLIS_VERBOSITY",
        lookup("TRELLIS_VERBOSITY"),
        "quiet, normal, verbose, debug",
    );

    config
}

fn override_parsed<T>(field: &mut T, var: &str, raw: Option<String>, valid: &str)
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = raw else {
        return;
    };
    match raw.trim().parse() {
        Ok(parsed) => *field = parsed,
        Err(e) => tracing::warn!(
            "{}: {} (valid: {}); keeping configured value",
            var,
            e,
            valid
        ),
    }
}

/// Map the accepted flag spellings onto `bool`'s own `FromStr` input.
fn normalize_flag(raw: &str) -> String {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => "true".to_string(),
        "0" | "false" | "no" | "off" => "false".to_string(),
        other => other.to_string(),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|idx| idx + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "resolve",
    "extension",
    "layout_name",
    "directory",
    "strategy",
    "walk_order",
    "skip_unreadable",
    "output",
    "format",
    "verbosity",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(known, _)| known.to_string())
}

/// Levenshtein distance over bytes, keeping a single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = (row[j + 1] + 1).min(row[j] + 1).min(substitute);
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_counts_single_edits() {
        assert_eq!(edit_distance("strategy", "strategy"), 0);
        assert_eq!(edit_distance("extention", "extension"), 1);
        assert_eq!(edit_distance("strategee", "strategy"), 2);
        assert_eq!(edit_distance("", "format"), 6);
        assert_eq!(edit_distance("output", ""), 6);
    }

    #[test]
    fn suggest_key_ignores_distant_names() {
        assert_eq!(suggest_key("verbosty").as_deref(), Some("verbosity"));
        assert_eq!(suggest_key("colour_scheme"), None);
    }
}
