use clap::{Parser, Subcommand};
use immview::strategy::Platform;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "immview", bin_name = "immview", version = get_version())]
#[command(about = "Open a stored IMM issue at a given page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Documents folder holding IMM_issues/ (defaults to the system Documents folder)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub root: Option<PathBuf>,

    /// Platform family whose launchers to use: macos, windows or posix
    #[arg(long, global = true, value_name = "FAMILY", help_heading = "Options")]
    pub platform: Option<Platform>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (log each launch attempt)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open an issue in the system PDF viewer
    #[command(alias = "o", display_order = 1)]
    Open {
        /// Year of the issue (1869-2100)
        #[arg(allow_hyphen_values = true)]
        year: String,

        /// Month of the issue (1-12)
        #[arg(allow_hyphen_values = true)]
        month: String,

        /// Page to open at
        #[arg(allow_hyphen_values = true, default_value = "1")]
        page: String,
    },

    /// Print the file path where an issue is expected
    #[command(display_order = 2)]
    Path {
        /// Year of the issue (1869-2100)
        #[arg(allow_hyphen_values = true)]
        year: String,

        /// Month of the issue (1-12)
        #[arg(allow_hyphen_values = true)]
        month: String,
    },

    /// List the launch steps tried on each platform, in order
    #[command(display_order = 3)]
    Strategies,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_open_with_default_page() {
        let cli = Cli::try_parse_from(["immview", "open", "2023", "01"]).unwrap();
        match cli.command {
            Commands::Open { year, month, page } => {
                assert_eq!((year.as_str(), month.as_str(), page.as_str()), ("2023", "01", "1"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["immview", "o", "2023", "1", "-4"]).unwrap();
        match cli.command {
            Commands::Open { page, .. } => assert_eq!(page, "-4"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "immview",
            "path",
            "1999",
            "12",
            "--root",
            "/srv/docs",
            "--platform",
            "windows",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/docs")));
        assert_eq!(cli.platform, Some(Platform::Windows));
        assert!(cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert!(Cli::try_parse_from(["immview", "strategies", "--platform", "beos"]).is_err());
    }
}
