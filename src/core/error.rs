//! Error types for the shell core.
//!
//! Every failure class gets its own variant so logs and tests can tell them
//! apart, but the rendered output collapses to the single generic error line
//! at the command layer (see [`crate::core::commands`]). Errors never
//! propagate past the command that produced them; the loop always reads the
//! next line.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// An entirely empty input line.
    #[error("empty input line")]
    EmptyInput,

    /// First field of the line is not a recognized verb.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `L` issued with no path portion at all.
    #[error("missing path operand")]
    MissingPath,

    /// The listing or record path does not exist.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// The listing path names a regular file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// `-s` or `-e` with nothing after the flag tokens.
    #[error("missing argument for search flag")]
    MissingArgument,

    /// `C` remainder without the ` -n ` separator.
    #[error("malformed create command")]
    MalformedCreate,

    /// `C` target path already occupied by a file.
    #[error("record already exists: {0}")]
    RecordExists(PathBuf),

    /// `D`/`R` operand without the reserved extension.
    #[error("not a record file: {0}")]
    NotARecord(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
