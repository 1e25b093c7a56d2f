//! User configuration directory resolution with test isolation support.
//!
//! On Windows and macOS, `dirs::config_dir()` uses system APIs rather than
//! environment variables, so setting `XDG_CONFIG_HOME` in tests has no effect
//! there. `TRELLIS_CONFIG_HOME` overrides the lookup on every platform.

use std::path::PathBuf;

/// Environment variable for test isolation of the user config directory.
pub const TRELLIS_CONFIG_HOME_VAR: &str = "TRELLIS_CONFIG_HOME";

/// Directory holding the user-level `trellis/config.toml`.
///
/// Returns `TRELLIS_CONFIG_HOME` when set, otherwise `dirs::config_dir()`.
pub fn trellis_config_dir() -> Option<PathBuf> {
    std::env::var(TRELLIS_CONFIG_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}
