use super::{LaunchCommand, Launcher};
use crate::error::LaunchError;
use std::collections::VecDeque;
use std::io;

/// Test launcher: records commands and replays scripted results.
///
/// Results are consumed in order; once the script runs out every further
/// launch gets the fallback result.
#[derive(Debug, Default)]
pub struct ScriptedLauncher {
    script: VecDeque<bool>,
    fallback_ok: bool,
    calls: Vec<LaunchCommand>,
}

impl ScriptedLauncher {
    /// Every launch succeeds.
    pub fn succeeding() -> Self {
        Self {
            fallback_ok: true,
            ..Self::default()
        }
    }

    /// Every launch fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Launch `n` gets `results[n]`; launches past the end fail.
    pub fn with_results(results: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: results.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[LaunchCommand] {
        &self.calls
    }

    pub fn programs(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.program.as_str()).collect()
    }
}

impl Launcher for ScriptedLauncher {
    fn launch(&mut self, command: &LaunchCommand) -> Result<(), LaunchError> {
        self.calls.push(command.clone());
        let ok = self.script.pop_front().unwrap_or(self.fallback_ok);
        if ok {
            Ok(())
        } else {
            Err(LaunchError::Spawn {
                program: command.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "simulated launch failure"),
            })
        }
    }
}
