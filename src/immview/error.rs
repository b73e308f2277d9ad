use crate::model::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Rejection of the raw year/month/page input. Only the first offending
/// field is ever reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be a whole number")]
    NotANumber(Field),

    #[error("{1}")]
    OutOfRange(Field, String),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotANumber(field) | ValidationError::OutOfRange(field, _) => *field,
        }
    }
}

/// Failure of a single launch step.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not build file URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("no launch steps configured")]
    EmptyChain,
}

/// Why a validated request could not be turned into an open viewer.
#[derive(Error, Debug)]
pub enum OpenError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No read access to: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Could not open {}: {last}", .path.display())]
    AllStrategiesFailed { path: PathBuf, last: LaunchError },
}

impl OpenError {
    pub fn path(&self) -> &PathBuf {
        match self {
            OpenError::NotFound(path) | OpenError::PermissionDenied(path) => path,
            OpenError::AllStrategiesFailed { path, .. } => path,
        }
    }

    /// Short reason shown to the user.
    pub fn reason(&self) -> &'static str {
        match self {
            OpenError::NotFound(_) => "file not found",
            OpenError::PermissionDenied(_) => "no read access",
            OpenError::AllStrategiesFailed { .. } => "could not open",
        }
    }
}

#[derive(Error, Debug)]
pub enum ImmError {
    #[error("Input error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Could not determine the Documents directory for the current user")]
    NoDocumentsDir,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ImmError>;
