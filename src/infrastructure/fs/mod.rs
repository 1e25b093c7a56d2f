//! Entry Source Implementations
//!
//! Concrete implementations of the EntrySource port.

mod config_home;
mod local;
mod memory;

pub use config_home::{trellis_config_dir, TRELLIS_CONFIG_HOME_VAR};
pub use local::LocalFs;
pub use memory::MemoryFs;
