//! Configuration module for Trellis
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TRELLIS_*)
//! 3. Project config (<root>/trellis.toml)
//! 4. User config (<config dir>/trellis/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, OutputFormat, ResolveConfig, Verbosity};
