//! Command parsing and execution.
//!
//! This module provides:
//! - [`Command`] for parsed shell commands
//! - [`CommandResult`] for execution results
//! - [`execute_command`] to run a command against the filesystem
//!
//! # Architecture
//!
//! A [`RawCommand`] from the parser becomes a `Command` via [`Command::parse`],
//! then runs through `execute_command`. Parsing is lenient on purpose:
//! malformed operands stay representable and fail at execution, where every
//! error collapses into the single generic error line.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use crate::core::parser::{self, PathSplit, RawCommand};

/// Parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List directory contents with optional flags.
    List(PathSplit),
    /// Create a record; holds the raw remainder, split on ` -n ` at
    /// execution.
    Create(String),
    /// Dump a record's contents.
    Read(String),
    /// Remove a record.
    Delete(String),
    /// Unrecognized verb, kept for the log.
    Unknown(String),
}

impl Command {
    /// Interpret a raw command's verb and remainder.
    ///
    /// `D`, `R`, and `C` operands are the remainder fields rejoined with
    /// single spaces, so paths with embedded spaces survive.
    pub fn parse(raw: &RawCommand) -> Self {
        match raw.verb.as_str() {
            "L" => Self::List(parser::split_path_and_flags(&raw.fields)),
            "C" => Self::Create(raw.fields.join(" ")),
            "D" => Self::Delete(raw.fields.join(" ")),
            "R" => Self::Read(raw.fields.join(" ")),
            other => Self::Unknown(other.to_string()),
        }
    }
}
