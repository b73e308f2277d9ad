//! # Process Launching
//!
//! Opening a document always ends in starting some external program. The
//! [`Launcher`] trait is the boundary between the opener and the OS, so the
//! strategy logic can be exercised without spawning anything.
//!
//! ## Implementations
//!
//! - [`system::SystemLauncher`]: spawns the command and returns immediately.
//!   The child is never waited on; a launch only fails when the program cannot
//!   be started at all.
//! - [`scripted::ScriptedLauncher`]: records every command and answers with
//!   pre-programmed successes or failures. Used by tests.

use crate::error::LaunchError;
use std::fmt;

pub mod scripted;
pub mod system;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Starts external programs.
pub trait Launcher {
    /// Start `command`. Returns once the process has been handed to the OS.
    fn launch(&mut self, command: &LaunchCommand) -> Result<(), LaunchError>;
}

impl<L: Launcher + ?Sized> Launcher for &mut L {
    fn launch(&mut self, command: &LaunchCommand) -> Result<(), LaunchError> {
        (**self).launch(command)
    }
}
