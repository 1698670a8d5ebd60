//! Application configuration.
//!
//! Centralizes the constant tables used throughout the shell. The flag-token
//! set and the record extension are fixed for the lifetime of the process.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed by `--help`.
pub const APP_NAME: &str = "dsush";

// =============================================================================
// Command Grammar
// =============================================================================

/// Recognized listing flag tokens.
///
/// The first input field matching one of these marks the end of the path
/// portion of an `L` command.
pub const FLAG_TOKENS: &[&str] = &["-r", "-f", "-s", "-e"];

/// Literal separator between directory prefix and record name in `C`.
pub const CREATE_SEPARATOR: &str = " -n ";

/// First input character that terminates the shell.
pub const QUIT_CHAR: char = 'Q';

// =============================================================================
// Records
// =============================================================================

/// Reserved extension for record files (without the leading dot).
pub const RECORD_EXTENSION: &str = "dsu";

// =============================================================================
// Output Protocol
// =============================================================================

/// Literal printed for every failure, whatever the cause.
pub const ERROR_OUTPUT: &str = "ERROR";

/// Sentinel printed when a record holds nothing after trimming.
pub const EMPTY_OUTPUT: &str = "EMPTY";

/// Token appended after the absolute path on successful delete.
pub const DELETED_SUFFIX: &str = "DELETED";

// =============================================================================
// Filesystem
// =============================================================================

/// Entries whose name starts with this are excluded from the base listing.
pub const HIDDEN_MARKER: char = '.';
