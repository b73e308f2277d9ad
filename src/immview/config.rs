//! # Configuration
//!
//! There are no configuration files. Everything the opener needs is carried in
//! an [`OpenerConfig`] value, which the CLI builds from its flags:
//!
//! | Flag | Default | Description |
//! |------|---------|-------------|
//! | `--root <dir>` | OS Documents folder | Documents root holding `IMM_issues/` |
//! | `--platform <family>` | detected from the build target | Strategy chain to use |

use crate::strategy::Platform;
use std::path::PathBuf;

/// Where the documents root comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RootSource {
    /// Ask the OS for the current user's Documents folder on every request.
    #[default]
    System,
    /// Use this directory instead.
    Fixed(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerConfig {
    pub root: RootSource,
    pub platform: Platform,
}

impl Default for OpenerConfig {
    fn default() -> Self {
        Self {
            root: RootSource::System,
            platform: Platform::current(),
        }
    }
}

impl OpenerConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = RootSource::Fixed(root.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}
