//! # immview CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns the result into a process exit status.
//!
//! - `cli/setup.rs`: clap argument definitions and version string
//! - `cli/commands.rs`: logging setup, context wiring, per-command handlers
//! - `cli/print.rs`: colored terminal and JSON output
//!
//! Exit status is 0 when the command did what was asked and 1 otherwise,
//! including when an issue could not be opened.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
