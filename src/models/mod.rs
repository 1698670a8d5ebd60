//! Data types shared across the shell.

mod output;

pub use output::OutputLine;
