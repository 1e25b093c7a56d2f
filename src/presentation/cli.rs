//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.
//! Options left unset on the command line fall back to the loaded config.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{ResolveStrategy, WalkOrder};

/// Trellis - resolve inherited layout chains in a template tree
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the layout chain of every content file
    Group {
        /// Directory to resolve
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Template file extension, without the dot
        #[arg(long)]
        ext: Option<String>,

        /// Stem name of layout files
        #[arg(long)]
        layout: Option<String>,

        /// Only report content stems starting with this prefix
        #[arg(long)]
        dir: Option<String>,

        /// Resolution algorithm
        #[arg(long, value_enum)]
        strategy: Option<ResolveStrategy>,

        /// Traversal order
        #[arg(long, value_enum)]
        order: Option<WalkOrder>,

        /// Skip directories that cannot be read instead of failing
        #[arg(long)]
        skip_unreadable: bool,

        /// Config file to load instead of the discovered one
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print every visited path in traversal order
    Walk {
        /// Directory to walk
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Traversal order
        #[arg(long, value_enum)]
        order: Option<WalkOrder>,

        /// Do not descend into entries with this name (repeatable)
        #[arg(long = "skip", value_name = "NAME")]
        skip: Vec<String>,
    },
}
