//! # CLI Layer
//!
//! This module is **one possible UI client** for immview. It stands in for the
//! three-field form of a desktop front end: the year, month and page arrive as
//! raw positional strings and are handed to the API untouched, so validation
//! messages are the library's own.
//!
//! The CLI layer is the **only** place that:
//! - Parses arguments
//! - Installs the `tracing` subscriber
//! - Writes to stdout/stderr
//! - Decides the exit status
//!
//! ## Commands
//!
//! - `immview open <year> <month> [page]` (alias `o`): open an issue
//! - `immview path <year> <month>`: print where an issue is expected
//! - `immview strategies [--platform <family>]`: list launch steps
//!
//! Global flags: `--root`, `--platform`, `--json`, `-v/--verbose`.

mod commands;
mod print;
pub mod setup;

pub use commands::run;
