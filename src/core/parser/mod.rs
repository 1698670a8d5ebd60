//! Line parsing for the read-eval loop.
//!
//! Supports:
//! - Quit detection (`Q` as the first character of the line)
//! - Verb extraction (single-character commands `L`, `C`, `D`, `R`)
//! - Path/flag boundary splitting for `L` (see [`tokenizer`])

mod tokenizer;

pub use tokenizer::{PathSplit, split_path_and_flags};

use crate::config::QUIT_CHAR;
use crate::core::error::ShellError;

// =============================================================================
// Raw Command
// =============================================================================

/// One input line split into verb and remainder fields.
///
/// Fields come from splitting on single spaces, so consecutive spaces produce
/// empty fields and rejoining with a single space is lossless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCommand {
    /// The first field of the line.
    pub verb: String,
    /// Every field after the verb, unmodified.
    pub fields: Vec<String>,
}

impl RawCommand {
    fn split(line: &str) -> Self {
        let mut fields = line.split(' ').map(str::to_string);
        let verb = fields.next().unwrap_or_default();
        Self {
            verb,
            fields: fields.collect(),
        }
    }
}

// =============================================================================
// Line Dispatch
// =============================================================================

/// What the read-eval loop should do with an input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineAction {
    /// Terminate the process with a normal exit status.
    Quit,
    /// Dispatch the command.
    Run(RawCommand),
}

/// Classify one input line.
///
/// The quit check looks at the first character only and runs before any
/// splitting, so `Quit` and even `Qx` terminate the shell. An entirely empty
/// line is an error.
pub fn parse_line(line: &str) -> Result<LineAction, ShellError> {
    if line.is_empty() {
        return Err(ShellError::EmptyInput);
    }
    if line.starts_with(QUIT_CHAR) {
        return Ok(LineAction::Quit);
    }
    Ok(LineAction::Run(RawCommand::split(line)))
}
