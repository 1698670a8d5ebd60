//! Command execution logic.
//!
//! Runs parsed commands against the real filesystem. This is the single
//! point where structured errors collapse into the generic error line; the
//! cause goes to the log and never to stdout.

use std::path::Path;

use crate::config::{CREATE_SEPARATOR, DELETED_SUFFIX, EMPTY_OUTPUT};
use crate::core::error::ShellError;
use crate::core::listing::{self, FlagSet};
use crate::core::parser::PathSplit;
use crate::core::records;
use crate::models::OutputLine;

use super::{Command, CommandResult};

/// Execute a parsed command and return its output.
pub fn execute_command(cmd: Command) -> CommandResult {
    let outcome = match cmd {
        Command::List(split) => execute_list(&split),
        Command::Create(remainder) => execute_create(&remainder),
        Command::Read(path) => execute_read(&path),
        Command::Delete(path) => execute_delete(&path),
        Command::Unknown(verb) => Err(ShellError::UnknownCommand(verb)),
    };
    match outcome {
        Ok(lines) => CommandResult::output(lines),
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            CommandResult::error()
        }
    }
}

/// Execute `L`: resolve the flag combination, walk, print one absolute path
/// per line. A listing with no path portion at all is an error, even though
/// an empty match set is not.
fn execute_list(split: &PathSplit) -> Result<Vec<OutputLine>, ShellError> {
    if split.path.is_empty() {
        return Err(ShellError::MissingPath);
    }
    let mode = FlagSet::consume(&split.flag_fields).resolve()?;
    tracing::debug!(path = %split.path, flags_used = split.flags_used, ?mode, "listing");

    let entries = listing::list_entries(Path::new(&split.path), &mode)?;
    Ok(entries
        .iter()
        .map(|p| OutputLine::text(p.display().to_string()))
        .collect())
}

/// Execute `C`: split the remainder on the first ` -n `, create the record,
/// print the constructed path.
fn execute_create(remainder: &str) -> Result<Vec<OutputLine>, ShellError> {
    let (dir, name) = remainder
        .split_once(CREATE_SEPARATOR)
        .ok_or(ShellError::MalformedCreate)?;
    let path = records::create(dir, name)?;
    Ok(vec![OutputLine::text(path.display().to_string())])
}

/// Execute `R`: print the record's trimmed contents, or the empty sentinel.
fn execute_read(path: &str) -> Result<Vec<OutputLine>, ShellError> {
    let line = match records::read(Path::new(path))? {
        Some(contents) => OutputLine::text(contents),
        None => OutputLine::text(EMPTY_OUTPUT),
    };
    Ok(vec![line])
}

/// Execute `D`: remove the record and confirm with its absolute path.
fn execute_delete(path: &str) -> Result<Vec<OutputLine>, ShellError> {
    let absolute = records::delete(Path::new(path))?;
    Ok(vec![OutputLine::text(format!(
        "{} {DELETED_SUFFIX}",
        absolute.display()
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{LineAction, parse_line};
    use std::fs;
    use tempfile::TempDir;

    /// Run one input line end to end, returning rendered output lines.
    fn run(line: &str) -> Vec<String> {
        let LineAction::Run(raw) = parse_line(line).unwrap() else {
            panic!("expected a runnable line");
        };
        execute_command(Command::parse(&raw))
            .output
            .iter()
            .map(|l| l.render().to_string())
            .collect()
    }

    #[test]
    fn test_list_trailing_space_is_error_not_empty_list() {
        assert_eq!(run("L "), vec!["ERROR"]);
    }

    #[test]
    fn test_list_verb_only_is_error() {
        assert_eq!(run("L"), vec!["ERROR"]);
    }

    #[test]
    fn test_list_flags_without_path_is_error() {
        assert_eq!(run("L -r"), vec!["ERROR"]);
    }

    #[test]
    fn test_list_missing_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let line = format!("L {}/nope", tmp.path().display());
        assert_eq!(run(&line), vec!["ERROR"]);
    }

    #[test]
    fn test_list_empty_directory_prints_nothing() {
        let tmp = TempDir::new().unwrap();
        let line = format!("L {}", tmp.path().display());
        assert!(run(&line).is_empty());
    }

    #[test]
    fn test_list_base_prints_absolute_paths() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"").unwrap();
        let line = format!("L {}", tmp.path().display());
        assert_eq!(run(&line), vec![tmp.path().join("a.txt").display().to_string()]);
    }

    #[test]
    fn test_list_search_with_spaced_argument() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("my notes.txt"), b"").unwrap();
        let line = format!("L {} -s my notes.txt", tmp.path().display());
        assert_eq!(
            run(&line),
            vec![tmp.path().join("my notes.txt").display().to_string()]
        );
    }

    #[test]
    fn test_list_search_without_argument_is_error() {
        let tmp = TempDir::new().unwrap();
        let line = format!("L {} -s", tmp.path().display());
        assert_eq!(run(&line), vec!["ERROR"]);
    }

    #[test]
    fn test_create_read_delete_round_trip() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().display().to_string();
        let record = tmp.path().join("note.dsu");

        assert_eq!(run(&format!("C {dir} -n note")), vec![record.display().to_string()]);
        assert_eq!(run(&format!("R {}", record.display())), vec!["EMPTY"]);

        fs::write(&record, "  journal entry \n").unwrap();
        assert_eq!(run(&format!("R {}", record.display())), vec!["journal entry"]);

        assert_eq!(
            run(&format!("D {}", record.display())),
            vec![format!("{} DELETED", record.display())]
        );
        assert!(!record.exists());
    }

    #[test]
    fn test_create_without_separator_is_error() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(run(&format!("C {} note", tmp.path().display())), vec!["ERROR"]);
    }

    #[test]
    fn test_create_existing_record_is_error() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().display().to_string();
        run(&format!("C {dir} -n note"));
        assert_eq!(run(&format!("C {dir} -n note")), vec!["ERROR"]);
    }

    #[test]
    fn test_read_wrong_extension_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("note.txt");
        fs::write(&path, "content").unwrap();
        assert_eq!(run(&format!("R {}", path.display())), vec!["ERROR"]);
    }

    #[test]
    fn test_delete_missing_record_is_error() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            run(&format!("D {}/gone.dsu", tmp.path().display())),
            vec!["ERROR"]
        );
    }

    #[test]
    fn test_unknown_verb_is_error() {
        assert_eq!(run("X do something"), vec!["ERROR"]);
    }
}
