use crate::model::OpenOutcome;
use crate::strategy::Platform;
use serde::Serialize;
use std::path::PathBuf;

pub mod open;
pub mod path;
pub mod strategies;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Description of one step in a strategy chain, for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub platform: Platform,
    pub position: usize,
    pub name: &'static str,
    pub honors_page: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<OpenOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: OpenOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_steps(mut self, steps: Vec<StepInfo>) -> Self {
        self.steps = steps;
        self
    }

    /// False only when an open was attempted and failed.
    pub fn is_success(&self) -> bool {
        !matches!(self.outcome, Some(OpenOutcome::Failed(_)))
    }
}
