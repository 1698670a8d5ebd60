//! dsush: an interactive shell for directory listings and `.dsu` records.
//!
//! Reads one command per line from stdin, executes it synchronously, and
//! writes line-oriented output to stdout. Every failure prints the single
//! generic error token and the loop continues; `Q` as the first character of
//! a line exits normally.

mod config;
mod core;
mod models;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::{Command, LineAction, execute_command, parse_line};

#[derive(Debug, Parser)]
#[command(name = "dsush", version, about = "Interactive record-file shell")]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(LineAction::Quit) => break,
            Ok(LineAction::Run(raw)) => {
                tracing::debug!(verb = %raw.verb, "dispatching");
                let result = execute_command(Command::parse(&raw));
                for out in &result.output {
                    writeln!(stdout, "{}", out.render())?;
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected input line");
                writeln!(stdout, "{}", config::ERROR_OUTPUT)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Logs go to stderr so the stdout line protocol stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(format!("{}=debug", config::APP_NAME))
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
