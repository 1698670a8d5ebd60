//! Flag interpretation and listing modes.
//!
//! The four flag tokens set independent booleans; the booleans resolve once
//! into a single [`ListingMode`] so the walker never re-derives priority
//! logic. Priority when several are set: file-only > name search > extension
//! search > recursive-only. Recursion alone is a full pre-order listing; in
//! combination it is purely a traversal-depth modifier.

mod walk;

pub use walk::list_entries;

use crate::core::error::ShellError;

// =============================================================================
// Flag Set
// =============================================================================

/// Independent listing flags consumed left-to-right from the flag fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub recursive: bool,
    pub file_only: bool,
    pub searching: bool,
    pub by_extension: bool,
    /// Everything after the first non-flag field, rejoined with single
    /// spaces. Serves as the search name or extension; ignored when no
    /// argument-bearing mode is active.
    pub argument: Option<String>,
}

impl FlagSet {
    /// Consume recognized flags from the front of the field list.
    ///
    /// Flags are idempotent and order-independent; the first non-flag field
    /// terminates consumption and becomes (part of) the argument.
    pub fn consume(fields: &[String]) -> Self {
        let mut set = Self::default();
        let mut rest = fields;
        while let Some((first, tail)) = rest.split_first() {
            match first.as_str() {
                "-r" => set.recursive = true,
                "-f" => set.file_only = true,
                "-s" => set.searching = true,
                "-e" => set.by_extension = true,
                _ => break,
            }
            rest = tail;
        }
        if !rest.is_empty() {
            set.argument = Some(rest.join(" "));
        }
        set
    }

    /// Resolve the flag combination into a single listing mode.
    ///
    /// A search or extension mode with no argument is an error.
    pub fn resolve(self) -> Result<ListingMode, ShellError> {
        if self.file_only {
            Ok(ListingMode::FileOnly {
                recursive: self.recursive,
            })
        } else if self.searching {
            let name = self.argument.ok_or(ShellError::MissingArgument)?;
            Ok(ListingMode::SearchByName {
                name,
                recursive: self.recursive,
            })
        } else if self.by_extension {
            let extension = self.argument.ok_or(ShellError::MissingArgument)?;
            Ok(ListingMode::SearchByExtension {
                extension,
                recursive: self.recursive,
            })
        } else if self.recursive {
            Ok(ListingMode::RecursiveFull)
        } else {
            Ok(ListingMode::Base)
        }
    }
}

// =============================================================================
// Listing Mode
// =============================================================================

/// Resolved traversal mode; exactly one executes per `L` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingMode {
    /// Immediate children only, hidden entries excluded.
    Base,
    /// Pre-order walk emitting both files and directories.
    RecursiveFull,
    /// Files only; directories never appear in the output.
    FileOnly { recursive: bool },
    /// Files whose name exactly equals `name`.
    SearchByName { name: String, recursive: bool },
    /// Files whose extension (suffix after the final dot) equals `extension`.
    SearchByExtension { extension: String, recursive: bool },
}
