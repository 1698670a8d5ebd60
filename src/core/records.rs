//! Record store: create, read, and delete `.dsu` files.
//!
//! Records are plain files carrying the reserved extension. Every operation
//! re-resolves its path from scratch; nothing about a record persists in
//! memory between commands.

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::RECORD_EXTENSION;
use crate::core::error::ShellError;

/// Create `<dir>/<name>.dsu`, failing if a file is already there.
///
/// Creation is exclusive, so a conflicting record is never truncated.
/// Returns the constructed path, which is what the shell prints.
pub fn create(dir: &str, name: &str) -> Result<PathBuf, ShellError> {
    let path = PathBuf::from(format!("{dir}/{name}.{RECORD_EXTENSION}"));
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => Ok(path),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(ShellError::RecordExists(path)),
        Err(e) => Err(e.into()),
    }
}

/// Read a record's contents, trimmed of surrounding whitespace.
///
/// `None` means the record exists but holds nothing after trimming; the
/// caller prints the empty sentinel.
pub fn read(path: &Path) -> Result<Option<String>, ShellError> {
    check_record(path)?;
    let contents = fs::read_to_string(path)?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Delete a record and return its absolute path.
pub fn delete(path: &Path) -> Result<PathBuf, ShellError> {
    check_record(path)?;
    let absolute = std::path::absolute(path)?;
    fs::remove_file(path)?;
    Ok(absolute)
}

/// A record operand must name an existing regular file with the reserved
/// extension.
fn check_record(path: &Path) -> Result<(), ShellError> {
    if !path.is_file() {
        return Err(ShellError::PathNotFound(path.to_path_buf()));
    }
    if path.extension().and_then(OsStr::to_str) != Some(RECORD_EXTENSION) {
        return Err(ShellError::NotARecord(path.to_path_buf()));
    }
    Ok(())
}
