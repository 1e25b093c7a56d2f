use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use trellis::config::OutputFormat;
use trellis::presentation::{create_renderer, VisitedEntry};
use trellis::{walk, LocalFs, WalkControl, WalkOrder};

use super::ensure_directory;

pub fn cmd_walk(
    root: &Path,
    order: WalkOrder,
    skip: &[String],
    format: OutputFormat,
    verbose: u8,
) -> Result<()> {
    ensure_directory(root)?;

    let source = LocalFs::new(root);
    let mut visited = Vec::new();
    walk(&source, ".", order, |entry| {
        if entry.error.is_some() {
            return WalkControl::Continue;
        }
        visited.push(VisitedEntry::new(entry.path, entry.kind));
        if entry.is_container() && skip.iter().any(|name| name == entry.name()) {
            tracing::debug!(path = entry.path, "skipping subtree");
            WalkControl::SkipSubtree
        } else {
            WalkControl::Continue
        }
    })
    .with_context(|| format!("failed to walk {}", root.display()))?;

    let renderer = create_renderer(format, verbose);
    let mut out = io::stdout().lock();
    renderer.render_walk(&mut out, &visited)?;
    Ok(())
}
