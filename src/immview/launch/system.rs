use super::{LaunchCommand, Launcher};
use crate::error::LaunchError;
use std::process::{Command, Stdio};

/// Launches commands on the real OS, fire-and-forget.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for SystemLauncher {
    fn launch(&mut self, command: &LaunchCommand) -> Result<(), LaunchError> {
        Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })
    }
}
