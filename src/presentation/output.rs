//! Output Rendering
//!
//! Provides a unified interface for rendering results as text or JSON.
//! Renderers write to any `io::Write` so the binary and tests share them.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::domain::ports::EntryKind;
use crate::domain::value_objects::LayoutGroups;

/// One path reported by the `walk` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitedEntry {
    pub path: String,
    /// `"container"`, `"leaf"`, or `null` when the root could not be inspected
    #[serde(serialize_with = "serialize_kind")]
    pub kind: Option<EntryKind>,
}

impl VisitedEntry {
    pub fn new(path: impl Into<String>, kind: Option<EntryKind>) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

fn serialize_kind<S: serde::Serializer>(
    kind: &Option<EntryKind>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match kind {
        Some(EntryKind::Container) => serializer.serialize_str("container"),
        Some(EntryKind::Leaf) => serializer.serialize_str("leaf"),
        None => serializer.serialize_none(),
    }
}

/// Trait for rendering command results
pub trait OutputRenderer {
    /// Render the stem to layout chain mapping
    fn render_groups(&self, out: &mut dyn Write, groups: &LayoutGroups) -> io::Result<()>;

    /// Render walked paths in visit order
    fn render_walk(&self, out: &mut dyn Write, entries: &[VisitedEntry]) -> io::Result<()>;
}

/// Text renderer: one line per stem or path
#[derive(Debug, Default)]
pub struct TextRenderer {
    /// Verbosity level; above zero the walk output marks containers
    pub verbose: u8,
}

impl OutputRenderer for TextRenderer {
    fn render_groups(&self, out: &mut dyn Write, groups: &LayoutGroups) -> io::Result<()> {
        for (stem, chain) in groups.iter() {
            writeln!(out, "{} -> [{}]", stem, chain.join(", "))?;
        }
        Ok(())
    }

    fn render_walk(&self, out: &mut dyn Write, entries: &[VisitedEntry]) -> io::Result<()> {
        for entry in entries {
            match entry.kind {
                Some(EntryKind::Container) if self.verbose > 0 => {
                    writeln!(out, "{}/", entry.path)?
                }
                _ => writeln!(out, "{}", entry.path)?,
            }
        }
        Ok(())
    }
}

/// JSON renderer for scripting
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_groups(&self, out: &mut dyn Write, groups: &LayoutGroups) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, groups)?;
        writeln!(out)
    }

    fn render_walk(&self, out: &mut dyn Write, entries: &[VisitedEntry]) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, entries)?;
        writeln!(out)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
