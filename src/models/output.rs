//! Output data types for rendering to stdout.

use crate::config::ERROR_OUTPUT;

/// A single line of shell output.
///
/// Failures carry no message: every error renders as the same literal token,
/// so callers cannot distinguish causes from output alone. The structured
/// cause only reaches the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text line.
    Text(String),
    /// The generic failure line.
    Error,
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Rendered form written to stdout.
    pub fn render(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Error => ERROR_OUTPUT,
        }
    }
}
