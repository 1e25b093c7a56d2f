//! Tree walker
//!
//! Visits every entry reachable from a root exactly once, depth-first or
//! breadth-first, and lets the visitor steer the traversal with a
//! [`WalkControl`] directive.
//!
//! Skip semantics are the same in both orders:
//! - `SkipSubtree` on a container: its descendants are not visited.
//! - `SkipSubtree` on a leaf: the leaf's remaining siblings are not visited.
//!   Containers listed before it keep their subtrees.
//! - `SkipAll`: the walk stops and returns `Ok(())`.
//!
//! A failed `list` is reported through a second visit of the container with
//! `error` set. `Continue` turns it into [`WalkError::Listing`],
//! `SkipSubtree` swallows it.

use std::collections::VecDeque;

use thiserror::Error;

use crate::domain::ports::{EntryKind, EntrySource, SourceError};
use crate::domain::value_objects::{entry_path, WalkOrder};

/// Directive returned by the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkControl {
    #[default]
    Continue,
    SkipSubtree,
    SkipAll,
}

/// One visit handed to the visitor
#[derive(Debug, Clone, Copy)]
pub struct WalkEntry<'a> {
    pub path: &'a str,
    /// `None` only when the root could not be inspected
    pub kind: Option<EntryKind>,
    /// Set when inspecting or listing this entry failed
    pub error: Option<&'a SourceError>,
}

impl<'a> WalkEntry<'a> {
    fn new(path: &'a str, kind: EntryKind) -> Self {
        Self {
            path,
            kind: Some(kind),
            error: None,
        }
    }

    fn failed(path: &'a str, kind: Option<EntryKind>, error: &'a SourceError) -> Self {
        Self {
            path,
            kind,
            error: Some(error),
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_some_and(EntryKind::is_container)
    }

    /// Final path segment
    pub fn name(&self) -> &'a str {
        entry_path::split(self.path).1
    }
}

/// Unskipped traversal failure
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("failed to stat '{path}': {source}")]
    Stat {
        path: String,
        #[source]
        source: SourceError,
    },

    #[error("failed to list '{path}': {source}")]
    Listing {
        path: String,
        #[source]
        source: SourceError,
    },
}

impl WalkError {
    pub fn path(&self) -> &str {
        match self {
            WalkError::Stat { path, .. } | WalkError::Listing { path, .. } => path,
        }
    }
}

/// Walk `root` in the given order.
pub fn walk<S, F>(source: &S, root: &str, order: WalkOrder, visit: F) -> Result<(), WalkError>
where
    S: EntrySource + ?Sized,
    F: FnMut(&WalkEntry<'_>) -> WalkControl,
{
    match order {
        WalkOrder::DepthFirst => walk_depth_first(source, root, visit),
        WalkOrder::BreadthFirst => walk_breadth_first(source, root, visit),
    }
}

/// Stat the root, reporting a failure to the visitor.
///
/// `Ok(None)` means the visitor skipped the failure and the walk is over.
fn stat_root<S, F>(source: &S, root: &str, visit: &mut F) -> Result<Option<EntryKind>, WalkError>
where
    S: EntrySource + ?Sized,
    F: FnMut(&WalkEntry<'_>) -> WalkControl,
{
    match source.stat(root) {
        Ok(kind) => Ok(Some(kind)),
        Err(error) => {
            let directive = visit(&WalkEntry::failed(root, None, &error));
            match directive {
                WalkControl::Continue => Err(WalkError::Stat {
                    path: root.to_string(),
                    source: error,
                }),
                WalkControl::SkipSubtree | WalkControl::SkipAll => Ok(None),
            }
        }
    }
}

/// How a finished subtree affects its siblings
enum Flow {
    Continue,
    SkipSiblings,
    Stop,
}

/// Pre-order recursive walk.
pub fn walk_depth_first<S, F>(source: &S, root: &str, mut visit: F) -> Result<(), WalkError>
where
    S: EntrySource + ?Sized,
    F: FnMut(&WalkEntry<'_>) -> WalkControl,
{
    let Some(kind) = stat_root(source, root, &mut visit)? else {
        return Ok(());
    };
    tracing::debug!(root = %root, "walking depth-first");
    descend(source, root, kind, &mut visit)?;
    Ok(())
}

fn descend<S, F>(source: &S, path: &str, kind: EntryKind, visit: &mut F) -> Result<Flow, WalkError>
where
    S: EntrySource + ?Sized,
    F: FnMut(&WalkEntry<'_>) -> WalkControl,
{
    match visit(&WalkEntry::new(path, kind)) {
        WalkControl::Continue => {}
        WalkControl::SkipSubtree if kind.is_container() => return Ok(Flow::Continue),
        WalkControl::SkipSubtree => return Ok(Flow::SkipSiblings),
        WalkControl::SkipAll => return Ok(Flow::Stop),
    }
    if !kind.is_container() {
        return Ok(Flow::Continue);
    }

    let children = match source.list(path) {
        Ok(children) => children,
        Err(error) => {
            let directive = visit(&WalkEntry::failed(path, Some(kind), &error));
            return match directive {
                WalkControl::Continue => Err(WalkError::Listing {
                    path: path.to_string(),
                    source: error,
                }),
                WalkControl::SkipSubtree => Ok(Flow::Continue),
                WalkControl::SkipAll => Ok(Flow::Stop),
            };
        }
    };

    for child in children {
        let child_path = entry_path::join(path, &child.name);
        match descend(source, &child_path, child.kind, visit)? {
            Flow::Continue => {}
            Flow::SkipSiblings => break,
            Flow::Stop => return Ok(Flow::Stop),
        }
    }
    Ok(Flow::Continue)
}

/// Level-order walk over a FIFO queue of pending containers.
///
/// Each popped container is listed once and its children are visited in
/// listing order; child containers are queued as soon as their own visit
/// returns `Continue`.
pub fn walk_breadth_first<S, F>(source: &S, root: &str, mut visit: F) -> Result<(), WalkError>
where
    S: EntrySource + ?Sized,
    F: FnMut(&WalkEntry<'_>) -> WalkControl,
{
    let Some(kind) = stat_root(source, root, &mut visit)? else {
        return Ok(());
    };
    tracing::debug!(root = %root, "walking breadth-first");
    match visit(&WalkEntry::new(root, kind)) {
        WalkControl::Continue => {}
        WalkControl::SkipSubtree | WalkControl::SkipAll => return Ok(()),
    }
    if !kind.is_container() {
        return Ok(());
    }

    let mut pending = VecDeque::from([root.to_string()]);
    while let Some(dir) = pending.pop_front() {
        let children = match source.list(&dir) {
            Ok(children) => children,
            Err(error) => {
                let directive = visit(&WalkEntry::failed(&dir, Some(EntryKind::Container), &error));
                match directive {
                    WalkControl::Continue => {
                        return Err(WalkError::Listing {
                            path: dir,
                            source: error,
                        })
                    }
                    WalkControl::SkipSubtree => continue,
                    WalkControl::SkipAll => return Ok(()),
                }
            }
        };

        for child in children {
            let path = entry_path::join(&dir, &child.name);
            match visit(&WalkEntry::new(&path, child.kind)) {
                WalkControl::Continue => {
                    if child.kind.is_container() {
                        pending.push_back(path);
                    }
                }
                WalkControl::SkipSubtree if child.kind.is_container() => {}
                WalkControl::SkipSubtree => break,
                WalkControl::SkipAll => return Ok(()),
            }
        }
    }
    Ok(())
}
