//! Path/flag boundary tokenizer.
//!
//! The remainder of an `L` command is a free-form path that may itself
//! contain spaces, followed by zero or more flag tokens. The boundary is the
//! first field that exactly matches a recognized flag token; everything
//! before it, rejoined with single spaces, is the path. Rejoining is
//! lossless because the line was split on single spaces to begin with.

use crate::config::FLAG_TOKENS;

/// Result of splitting a remainder into path and flag fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSplit {
    /// The path portion, embedded spaces preserved.
    pub path: String,
    /// The boundary field and everything after it.
    pub flag_fields: Vec<String>,
    /// Whether any recognized flag token was present at all.
    ///
    /// Distinguishes "path only" from "nothing entered": an empty path with
    /// flags and an empty path without flags both fail, but the caller logs
    /// them differently.
    pub flags_used: bool,
}

/// Split the remainder fields at the first recognized flag token.
///
/// With no flag token present the entire remainder is the path and the flag
/// field list is empty.
pub fn split_path_and_flags(fields: &[String]) -> PathSplit {
    match fields
        .iter()
        .position(|f| FLAG_TOKENS.contains(&f.as_str()))
    {
        Some(boundary) => PathSplit {
            path: fields[..boundary].join(" "),
            flag_fields: fields[boundary..].to_vec(),
            flags_used: true,
        },
        None => PathSplit {
            path: fields.join(" "),
            flag_fields: Vec::new(),
            flags_used: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_without_flags() {
        let split = split_path_and_flags(&fields(&["/tmp/work"]));
        assert_eq!(split.path, "/tmp/work");
        assert!(split.flag_fields.is_empty());
        assert!(!split.flags_used);
    }

    #[test]
    fn test_path_with_embedded_spaces() {
        let split = split_path_and_flags(&fields(&["My", "Documents", "-r"]));
        assert_eq!(split.path, "My Documents");
        assert_eq!(split.flag_fields, fields(&["-r"]));
        assert!(split.flags_used);
    }

    #[test]
    fn test_consecutive_spaces_survive_rejoin() {
        // "a  b" splits into ["a", "", "b"]; rejoining restores both spaces.
        let split = split_path_and_flags(&fields(&["a", "", "b"]));
        assert_eq!(split.path, "a  b");
    }

    #[test]
    fn test_flag_first_yields_empty_path() {
        let split = split_path_and_flags(&fields(&["-r"]));
        assert_eq!(split.path, "");
        assert_eq!(split.flag_fields, fields(&["-r"]));
        assert!(split.flags_used);
    }

    #[test]
    fn test_only_first_boundary_counts() {
        let split = split_path_and_flags(&fields(&["docs", "-s", "notes", "-r"]));
        assert_eq!(split.path, "docs");
        assert_eq!(split.flag_fields, fields(&["-s", "notes", "-r"]));
    }

    #[test]
    fn test_flag_like_text_inside_path_is_not_a_boundary() {
        // "-rf" is not one of the four recognized tokens.
        let split = split_path_and_flags(&fields(&["docs", "-rf", "stuff"]));
        assert_eq!(split.path, "docs -rf stuff");
        assert!(!split.flags_used);
    }

    #[test]
    fn test_empty_remainder() {
        let split = split_path_and_flags(&[]);
        assert_eq!(split.path, "");
        assert!(split.flag_fields.is_empty());
        assert!(!split.flags_used);
    }
}
