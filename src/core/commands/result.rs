//! Command execution result type.

use crate::models::OutputLine;

/// Result of executing one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to print, in order.
    pub output: Vec<OutputLine>,
}

impl CommandResult {
    /// Create a result from output lines.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self { output: lines }
    }

    /// Create the generic failure result.
    pub fn error() -> Self {
        Self {
            output: vec![OutputLine::Error],
        }
    }
}
