//! Trellis CLI - resolve inherited layout chains in a template tree
//!
//! Usage: trellis <COMMAND>
//!
//! Commands:
//!   group   Print the layout chain of every content file
//!   walk    Print every visited path in traversal order

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trellis::config::{Config, OutputFormat, Verbosity};
use trellis::presentation::{Cli, Commands};

use commands::group::{cmd_group, GroupArgs};
use commands::walk::cmd_walk;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (root, explicit_config) = match &cli.command {
        Commands::Group { root, config, .. } => (root.clone(), config.clone()),
        Commands::Walk { root, .. } => (root.clone(), None),
    };

    let (config, warnings) = match explicit_config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::discover(Some(root.as_path())).context("failed to load config")?,
    };

    init_tracing(config.output.verbosity.raised_by(cli.verbose));
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match cli.command {
        Commands::Group {
            root,
            ext,
            layout,
            dir,
            strategy,
            order,
            skip_unreadable,
            config: _,
        } => cmd_group(
            &root,
            GroupArgs {
                ext,
                layout,
                dir,
                strategy,
                order,
                skip_unreadable,
            },
            &config,
            format,
            cli.verbose,
        ),
        Commands::Walk { root, order, skip } => cmd_walk(
            &root,
            order.unwrap_or(config.resolve.walk_order),
            &skip,
            format,
            cli.verbose,
        ),
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over the verbosity level.
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
