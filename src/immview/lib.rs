//! # immview Architecture
//!
//! immview opens a scanned magazine issue, stored locally as
//! `<Documents>/IMM_issues/<YYYY>_<MM>.pdf`, at a given page in whatever PDF
//! viewer the operating system offers. It is a library with a thin CLI client
//! on top; nothing below the CLI knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, renders output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates raw strings into a ValidatedRequest            │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Path resolution, access checks, strategy chains          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Launch Layer (launch/)                                     │
//! │  - Launcher trait                                           │
//! │  - SystemLauncher (production), ScriptedLauncher (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Flow
//!
//! raw strings → [`validate`] → [`location`] → access check → [`strategy`]
//! chain for the platform family → [`model::OpenOutcome`].
//!
//! Nothing is kept between requests. The documents root is looked up again
//! for every request and the only shared resource is the filesystem, which is
//! only ever read.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `open`, `path` and `strategies` logic
//! - [`validate`]: Input parsing and range checks
//! - [`location`]: Documents root lookup and issue path derivation
//! - [`strategy`]: Platform families and their launch step chains
//! - [`uri`]: `file://` URI construction
//! - [`launch`]: Process launching seam
//! - [`config`]: Opener configuration
//! - [`model`]: Core data types
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod launch;
pub mod location;
pub mod model;
pub mod strategy;
pub mod uri;
pub mod validate;
