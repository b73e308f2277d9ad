use crate::config::RootSource;
use crate::error::{ImmError, Result};
use crate::model::ValidatedRequest;
use directories::{BaseDirs, UserDirs};
use std::path::{Path, PathBuf};

/// Folder under the documents root holding the scanned issues.
pub const ISSUES_DIR: &str = "IMM_issues";

/// Looks up the current user's Documents directory.
///
/// Uses the platform's registered Documents folder when there is one, and
/// `<home>/Documents` otherwise.
pub fn system_documents_dir() -> Option<PathBuf> {
    if let Some(dir) = UserDirs::new().and_then(|u| u.document_dir().map(Path::to_path_buf)) {
        return Some(dir);
    }
    BaseDirs::new().map(|b| b.home_dir().join("Documents"))
}

/// Resolves the documents root for one request. Never cached: the OS setting
/// is read again every time.
pub fn documents_root(source: &RootSource) -> Result<PathBuf> {
    match source {
        RootSource::System => system_documents_dir().ok_or(ImmError::NoDocumentsDir),
        RootSource::Fixed(path) => Ok(path.clone()),
    }
}

/// `<root>/IMM_issues/<YYYY>_<MM>.pdf`
pub fn issue_path(root: &Path, req: &ValidatedRequest) -> PathBuf {
    root.join(ISSUES_DIR).join(req.file_name())
}

pub fn resolve(source: &RootSource, req: &ValidatedRequest) -> Result<PathBuf> {
    Ok(issue_path(&documents_root(source)?, req))
}
