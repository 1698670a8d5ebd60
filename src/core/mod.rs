//! Core logic for the shell.
//!
//! This module provides:
//! - [`parser`] to turn an input line into a command
//! - [`commands`] to execute commands and shape their output
//! - [`listing`] for flag interpretation and directory walking
//! - [`records`] for create/read/delete of record files

pub mod commands;
pub mod error;
pub mod listing;
pub mod parser;
pub mod records;

pub use commands::{Command, CommandResult, execute_command};
pub use parser::{LineAction, parse_line};
