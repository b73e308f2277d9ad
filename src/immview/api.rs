//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every operation, whatever UI sits on top.
//!
//! The facade:
//! - **Validates** raw input into a [`ValidatedRequest`] before any command runs
//! - **Dispatches** to the matching command function
//! - **Returns** structured `Result<CmdResult>` values
//!
//! It does no I/O of its own and never formats text for a terminal.
//!
//! ## Generic Over Launcher
//!
//! `IssuesApi<L: Launcher>`:
//! - Production: `IssuesApi<SystemLauncher>`
//! - Testing: `IssuesApi<ScriptedLauncher>`
//!
//! [`ValidatedRequest`]: crate::model::ValidatedRequest

use crate::commands;
use crate::config::OpenerConfig;
use crate::error::Result;
use crate::launch::Launcher;
use crate::model::{OpenOutcome, RawInput};
use crate::strategy::Platform;
use crate::validate::validate;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StepInfo};

/// Page used when only a year and month are given.
pub const DEFAULT_PAGE: &str = "1";

pub struct IssuesApi<L: Launcher> {
    launcher: L,
    config: OpenerConfig,
}

impl<L: Launcher> IssuesApi<L> {
    pub fn new(launcher: L, config: OpenerConfig) -> Self {
        Self { launcher, config }
    }

    pub fn config(&self) -> &OpenerConfig {
        &self.config
    }

    /// Validates `raw` and opens the matching issue. Validation errors are
    /// returned as `Err` before any filesystem access; open failures come back
    /// inside the result's outcome.
    pub fn open_issue(&mut self, raw: &RawInput) -> Result<CmdResult> {
        let req = validate(raw)?;
        commands::open::run(&mut self.launcher, &self.config, &req)
    }

    /// Like [`open_issue`](Self::open_issue), returning only the outcome.
    pub fn open(&mut self, raw: &RawInput) -> Result<OpenOutcome> {
        let req = validate(raw)?;
        commands::open::open(&mut self.launcher, &self.config, &req)
    }

    pub fn issue_path(&self, year: &str, month: &str) -> Result<CmdResult> {
        let req = validate(&RawInput::new(year, month, DEFAULT_PAGE))?;
        commands::path::run(&self.config, &req)
    }

    /// Steps for `platform`, or for every platform when `None`.
    pub fn strategies(&self, platform: Option<Platform>) -> CmdResult {
        match platform {
            Some(p) => commands::strategies::run(&[p]),
            None => commands::strategies::run(Platform::all()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ImmError, ValidationError};
    use crate::launch::scripted::ScriptedLauncher;
    use crate::model::Field;
    use std::path::PathBuf;

    fn api(launcher: &mut ScriptedLauncher) -> IssuesApi<&mut ScriptedLauncher> {
        let config = OpenerConfig::default()
            .with_root("/nonexistent/immview-docs")
            .with_platform(Platform::Posix);
        IssuesApi::new(launcher, config)
    }

    #[test]
    fn test_open_validation_error_short_circuits() {
        let mut launcher = ScriptedLauncher::succeeding();
        let err = api(&mut launcher)
            .open_issue(&RawInput::new("1868", "1", "1"))
            .unwrap_err();
        assert!(matches!(
            err,
            ImmError::Validation(ValidationError::OutOfRange(Field::Year, _))
        ));
        assert!(launcher.calls().is_empty());
    }

    #[test]
    fn test_open_dispatches_to_opener() {
        let mut launcher = ScriptedLauncher::succeeding();
        let res = api(&mut launcher)
            .open_issue(&RawInput::new("2023", "1", "5"))
            .unwrap();
        let report = res.outcome.as_ref().and_then(OpenOutcome::failure).unwrap();
        assert_eq!(report.reason, "file not found");
        assert_eq!(
            res.paths,
            vec![PathBuf::from("/nonexistent/immview-docs/IMM_issues/2023_01.pdf")]
        );
    }

    #[test]
    fn test_open_returns_outcome() {
        let mut launcher = ScriptedLauncher::succeeding();
        let outcome = api(&mut launcher)
            .open(&RawInput::new("2023", "1", "5"))
            .unwrap();
        assert!(!outcome.is_opened());
    }

    #[test]
    fn test_issue_path_uses_default_page() {
        let mut launcher = ScriptedLauncher::succeeding();
        let res = api(&mut launcher).issue_path("1999", "12").unwrap();
        assert!(res.paths[0].ends_with("1999_12.pdf"));
    }

    #[test]
    fn test_issue_path_validates_month() {
        let mut launcher = ScriptedLauncher::succeeding();
        let err = api(&mut launcher).issue_path("1999", "13").unwrap_err();
        assert!(matches!(
            err,
            ImmError::Validation(ValidationError::OutOfRange(Field::Month, _))
        ));
    }

    #[test]
    fn test_strategies_filter() {
        let mut launcher = ScriptedLauncher::succeeding();
        let api = api(&mut launcher);
        assert_eq!(api.strategies(Some(Platform::Windows)).steps.len(), 2);
        assert_eq!(api.strategies(None).steps.len(), 6);
    }
}
