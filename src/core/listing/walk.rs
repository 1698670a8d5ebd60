//! Directory walker behind every listing mode.
//!
//! One iterative walk serves all five modes; the mode compiles into a
//! [`WalkPlan`] that decides what gets emitted and whether subdirectories are
//! entered. Traversal uses an explicit frame stack, so tree depth only ever
//! consumes heap.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::HIDDEN_MARKER;
use crate::core::error::ShellError;

use super::ListingMode;

// =============================================================================
// Walk Plan
// =============================================================================

/// What a listing mode does at each directory level.
struct WalkPlan {
    /// Emit directory entries themselves (base and full recursive listings).
    emit_dirs: bool,
    /// Enter subdirectories after emitting them.
    descend: bool,
    /// Skip entries whose name starts with the hidden marker.
    ///
    /// Only the base listing filters hidden entries; every other mode
    /// reports them; the asymmetry is deliberate.
    skip_hidden: bool,
    filter: FileFilter,
}

/// Predicate applied to regular files before they are emitted.
enum FileFilter {
    All,
    Name(String),
    Extension(String),
}

impl FileFilter {
    fn matches(&self, path: &Path) -> bool {
        match self {
            Self::All => true,
            Self::Name(name) => {
                path.file_name().and_then(OsStr::to_str) == Some(name.as_str())
            }
            Self::Extension(ext) => {
                path.extension().and_then(OsStr::to_str) == Some(ext.as_str())
            }
        }
    }
}

impl ListingMode {
    fn plan(&self) -> WalkPlan {
        match self {
            Self::Base => WalkPlan {
                emit_dirs: true,
                descend: false,
                skip_hidden: true,
                filter: FileFilter::All,
            },
            Self::RecursiveFull => WalkPlan {
                emit_dirs: true,
                descend: true,
                skip_hidden: false,
                filter: FileFilter::All,
            },
            Self::FileOnly { recursive } => WalkPlan {
                emit_dirs: false,
                descend: *recursive,
                skip_hidden: false,
                filter: FileFilter::All,
            },
            Self::SearchByName { name, recursive } => WalkPlan {
                emit_dirs: false,
                descend: *recursive,
                skip_hidden: false,
                filter: FileFilter::Name(name.clone()),
            },
            Self::SearchByExtension {
                extension,
                recursive,
            } => WalkPlan {
                emit_dirs: false,
                descend: *recursive,
                skip_hidden: false,
                filter: FileFilter::Extension(extension.clone()),
            },
        }
    }
}

// =============================================================================
// Traversal
// =============================================================================

struct Entry {
    path: PathBuf,
    is_dir: bool,
}

/// One directory level, partitioned: regular files first, then
/// subdirectories, each partition in filesystem enumeration order. Entries
/// that are neither regular files nor directories are skipped.
fn read_level(dir: &Path) -> Result<Vec<Entry>, ShellError> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(Entry {
                path,
                is_dir: false,
            });
        } else if path.is_dir() {
            dirs.push(Entry { path, is_dir: true });
        }
    }
    files.append(&mut dirs);
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.starts_with(HIDDEN_MARKER))
}

/// Walk `path` according to `mode` and return matching absolute paths.
///
/// The path must name an existing directory. An empty result is a valid
/// outcome (nothing matched), distinct from the nonexistent-path error.
///
/// Recursive modes emit in pre-order: a directory entry always precedes the
/// entries of its descendants, and a directory's contents are emitted before
/// its later siblings.
pub fn list_entries(path: &Path, mode: &ListingMode) -> Result<Vec<PathBuf>, ShellError> {
    if !path.exists() {
        return Err(ShellError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ShellError::NotADirectory(path.to_path_buf()));
    }
    let root = std::path::absolute(path)?;
    let plan = mode.plan();

    let mut out = Vec::new();
    let mut stack = vec![read_level(&root)?.into_iter()];
    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.next() else {
            stack.pop();
            continue;
        };
        if plan.skip_hidden && is_hidden(&entry.path) {
            continue;
        }
        if entry.is_dir {
            if plan.emit_dirs {
                out.push(entry.path.clone());
            }
            if plan.descend {
                stack.push(read_level(&entry.path)?.into_iter());
            }
        } else if plan.filter.matches(&entry.path) {
            out.push(entry.path);
        }
    }
    Ok(out)
}
