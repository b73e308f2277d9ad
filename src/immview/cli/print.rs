use colored::Colorize;
use immview::api::{CmdMessage, CmdResult, MessageLevel, StepInfo};
use immview::error::Result;
use immview::model::FailureReport;
use std::path::PathBuf;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_failure(report: &FailureReport) {
    eprintln!("{} {}", "Open failed:".red().bold(), report.reason.red());
    eprintln!("{}", report.detail);
    eprintln!();
    eprintln!("{}", "Troubleshooting steps:".bold());
    for (i, hint) in report.hints.iter().enumerate() {
        eprintln!("{}. {}", i + 1, hint);
    }
}

pub(super) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

pub(super) fn print_steps(steps: &[StepInfo]) {
    let mut last_platform = None;
    for step in steps {
        if last_platform != Some(step.platform) {
            if last_platform.is_some() {
                println!();
            }
            println!("{}", step.platform.to_string().bold());
            last_platform = Some(step.platform);
        }
        let page_note = if step.honors_page {
            "page anchor".green()
        } else {
            "no page anchor".dimmed()
        };
        println!("  {}. {:<18} {}", step.position, step.name, page_note);
    }
}

pub(super) fn print_json(result: &CmdResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
