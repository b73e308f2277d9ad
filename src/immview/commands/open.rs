//! # Opening an Issue
//!
//! Given a [`ValidatedRequest`], the opener:
//!
//! 1. derives the issue path under the documents root,
//! 2. fails with "file not found" if nothing is there,
//! 3. fails with "no read access" if the file cannot be opened for reading,
//! 4. walks the strategy chain for the configured platform, stopping at the
//!    first step that launches.
//!
//! Steps 2 and 3 happen before any launcher is touched. Failures of individual
//! launch steps are logged and swallowed; only exhaustion of the whole chain is
//! reported, carrying the error of the last step.
//!
//! Every failure comes back as an [`OpenOutcome::Failed`] with the attempted
//! path and a fixed list of troubleshooting hints. The only `Err` this module
//! returns is for a documents root that cannot be determined at all.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::OpenerConfig;
use crate::error::{LaunchError, OpenError, Result};
use crate::launch::Launcher;
use crate::location;
use crate::model::{FailureReport, OpenOutcome, ValidatedRequest};
use crate::strategy::{chain, Platform, Step};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Checks that `path` exists and is readable by the current user.
pub fn check_access(path: &Path) -> std::result::Result<(), OpenError> {
    if !path.exists() {
        return Err(OpenError::NotFound(path.to_path_buf()));
    }
    if let Err(e) = File::open(path) {
        debug!(path = %path.display(), error = %e, "file exists but cannot be read");
        return Err(OpenError::PermissionDenied(path.to_path_buf()));
    }
    Ok(())
}

/// Tries each step of the platform's chain in order. Returns the step that
/// launched, or the error of the last step once the chain is exhausted.
pub fn run_chain<L: Launcher>(
    launcher: &mut L,
    platform: Platform,
    path: &Path,
    page: u64,
) -> std::result::Result<&'static Step, OpenError> {
    let mut last = LaunchError::EmptyChain;

    for step in chain(platform) {
        let attempt = step.command(path, page).and_then(|command| {
            debug!(step = step.name, command = %command, "trying launch step");
            launcher.launch(&command)
        });
        match attempt {
            Ok(()) => {
                info!(step = step.name, path = %path.display(), "document handed to viewer");
                return Ok(step);
            }
            Err(e) => {
                debug!(step = step.name, error = %e, "launch step failed");
                last = e;
            }
        }
    }

    warn!(%platform, error = %last, "every launch step failed");
    Err(OpenError::AllStrategiesFailed {
        path: path.to_path_buf(),
        last,
    })
}

/// Fixed, ordered troubleshooting hints shown with every failure.
pub fn troubleshooting_hints(path: &Path, platform: Platform) -> Vec<String> {
    let shown = path.display();
    let permissions = match platform {
        Platform::Windows => format!("Check permissions in terminal: icacls \"{}\"", shown),
        Platform::MacOs | Platform::Posix => {
            format!("Check permissions in terminal: ls -l '{}'", shown)
        }
    };

    let mut hints = vec![
        format!("Verify file exists at: {}", shown),
        permissions,
        "Try opening manually in your PDF viewer".to_string(),
    ];
    if platform == Platform::MacOs {
        hints.push(
            "Grant Full Disk Access to your terminal/IDE \
             (System Settings → Privacy & Security → Full Disk Access)"
                .to_string(),
        );
    }
    hints
}

pub fn failure_report(err: &OpenError, platform: Platform) -> FailureReport {
    FailureReport {
        reason: err.reason().to_string(),
        detail: err.to_string(),
        location: err.path().clone(),
        hints: troubleshooting_hints(err.path(), platform),
    }
}

fn dispatch<L: Launcher>(
    launcher: &mut L,
    config: &OpenerConfig,
    req: &ValidatedRequest,
) -> Result<(PathBuf, std::result::Result<&'static Step, OpenError>)> {
    let path = location::resolve(&config.root, req)?;
    debug!(path = %path.display(), platform = %config.platform, "resolved issue");

    let attempt = check_access(&path)
        .and_then(|()| run_chain(launcher, config.platform, &path, req.page()));
    Ok((path, attempt))
}

/// Opens the issue for `req`, reporting only the outcome.
pub fn open<L: Launcher>(
    launcher: &mut L,
    config: &OpenerConfig,
    req: &ValidatedRequest,
) -> Result<OpenOutcome> {
    let (_, attempt) = dispatch(launcher, config, req)?;
    Ok(match attempt {
        Ok(_) => OpenOutcome::Opened,
        Err(e) => OpenOutcome::Failed(failure_report(&e, config.platform)),
    })
}

pub fn run<L: Launcher>(
    launcher: &mut L,
    config: &OpenerConfig,
    req: &ValidatedRequest,
) -> Result<CmdResult> {
    let (path, attempt) = dispatch(launcher, config, req)?;
    let mut result = CmdResult::default().with_paths(vec![path]);

    let step = match attempt {
        Ok(step) => step,
        Err(e) => {
            let report = failure_report(&e, config.platform);
            return Ok(result.with_outcome(OpenOutcome::Failed(report)));
        }
    };

    if step.honors_page {
        result.add_message(CmdMessage::success(format!(
            "Opened {} at page {}",
            req.file_name(),
            req.page()
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Opened {}", req.file_name())));
        if req.page() > 1 {
            info!(step = step.name, page = req.page(), "page anchor not applied");
            result.add_message(CmdMessage::info(format!(
                "Opened via {}, which cannot jump to a page: go to page {} in the viewer.",
                step.name,
                req.page()
            )));
        }
    }

    Ok(result.with_outcome(OpenOutcome::Opened))
}
