use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use trellis::config::{Config, OutputFormat};
use trellis::presentation::create_renderer;
use trellis::{LayoutGrouper, LocalFs, ResolveStrategy, WalkOrder};

use super::ensure_directory;

/// Command-line overrides for the `[resolve]` config section
#[derive(Debug, Default)]
pub struct GroupArgs {
    pub ext: Option<String>,
    pub layout: Option<String>,
    pub dir: Option<String>,
    pub strategy: Option<ResolveStrategy>,
    pub order: Option<WalkOrder>,
    pub skip_unreadable: bool,
}

pub fn cmd_group(
    root: &Path,
    args: GroupArgs,
    config: &Config,
    format: OutputFormat,
    verbose: u8,
) -> Result<()> {
    ensure_directory(root)?;

    let mut resolve = config.resolve.clone();
    if let Some(ext) = args.ext {
        resolve.extension = ext;
    }
    if let Some(layout) = args.layout {
        resolve.layout_name = layout;
    }
    if let Some(dir) = args.dir {
        resolve.directory = dir;
    }
    if let Some(strategy) = args.strategy {
        resolve.strategy = strategy;
    }
    if let Some(order) = args.order {
        resolve.walk_order = order;
    }
    if args.skip_unreadable {
        resolve.skip_unreadable = true;
    }

    let source = LocalFs::new(root);
    let grouper = LayoutGrouper::new(resolve.query()).with_options(resolve.group_options());
    let groups = grouper
        .group(&source)
        .with_context(|| format!("failed to resolve layouts under {}", root.display()))?;

    tracing::info!(files = groups.len(), "resolved layout chains");

    let renderer = create_renderer(format, verbose);
    let mut out = io::stdout().lock();
    renderer.render_groups(&mut out, &groups)?;
    Ok(())
}
