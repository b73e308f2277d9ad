//! # Platform Strategy Chains
//!
//! Each platform family maps to an ordered list of [`Step`]s. A step knows how
//! to build the command that opens the document; the opener tries the steps in
//! order and stops at the first one whose launch succeeds.
//!
//! | Family  | Primary step (honors page)                      | Fallback (plain path)         |
//! |---------|-------------------------------------------------|-------------------------------|
//! | macOS   | `open file://...#page=N`                        | `osascript` asking Finder     |
//! | Windows | `rundll32 url.dll,FileProtocolHandler file:///` | `explorer <path>`             |
//! | POSIX   | `xdg-open <path>`                               | `gio open file://...`         |
//!
//! Only the primary macOS and Windows steps pass the page along. The viewer
//! opens at its default page otherwise.

use crate::error::LaunchError;
use crate::launch::LaunchCommand;
use crate::uri::file_uri;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Coarse OS classification used to pick a strategy chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Posix,
}

impl Platform {
    /// Family of the OS this binary was built for. Anything that is neither
    /// Apple nor Windows is treated as POSIX.
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Posix => "posix",
        }
    }

    pub fn all() -> &'static [Platform] {
        &[Platform::MacOs, Platform::Windows, Platform::Posix]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macos" | "mac" | "darwin" => Ok(Platform::MacOs),
            "windows" | "win" => Ok(Platform::Windows),
            "posix" | "linux" | "unix" | "other" => Ok(Platform::Posix),
            other => Err(format!(
                "unknown platform '{}' (expected macos, windows or posix)",
                other
            )),
        }
    }
}

type BuildFn = fn(&Path, u64) -> Result<LaunchCommand, LaunchError>;

/// One way of opening a document.
#[derive(Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    /// Whether the launched handler receives the `#page=N` anchor.
    pub honors_page: bool,
    build: BuildFn,
}

impl Step {
    pub fn command(&self, path: &Path, page: u64) -> Result<LaunchCommand, LaunchError> {
        (self.build)(path, page)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("honors_page", &self.honors_page)
            .finish()
    }
}

const MACOS_CHAIN: &[Step] = &[
    Step {
        name: "open-uri",
        honors_page: true,
        build: macos_open_uri,
    },
    Step {
        name: "finder-script",
        honors_page: false,
        build: macos_finder_script,
    },
];

const WINDOWS_CHAIN: &[Step] = &[
    Step {
        name: "protocol-handler",
        honors_page: true,
        build: windows_protocol_handler,
    },
    Step {
        name: "explorer",
        honors_page: false,
        build: windows_explorer,
    },
];

const POSIX_CHAIN: &[Step] = &[
    Step {
        name: "xdg-open",
        honors_page: false,
        build: posix_xdg_open,
    },
    Step {
        name: "gio-open-uri",
        honors_page: false,
        build: posix_gio_open_uri,
    },
];

/// The ordered fallback chain for a platform family.
pub fn chain(platform: Platform) -> &'static [Step] {
    match platform {
        Platform::MacOs => MACOS_CHAIN,
        Platform::Windows => WINDOWS_CHAIN,
        Platform::Posix => POSIX_CHAIN,
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn macos_open_uri(path: &Path, page: u64) -> Result<LaunchCommand, LaunchError> {
    let uri = file_uri(path, Platform::MacOs, Some(page))?;
    Ok(LaunchCommand::new("open", [uri]))
}

/// Escapes a string for use inside an AppleScript string literal.
fn applescript_quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn finder_script(path: &Path) -> String {
    format!(
        "tell application \"Finder\"\n    set theFile to POSIX file \"{}\" as alias\n    open theFile\nend tell",
        applescript_quote(&path.to_string_lossy())
    )
}

fn macos_finder_script(path: &Path, _page: u64) -> Result<LaunchCommand, LaunchError> {
    Ok(LaunchCommand::new("osascript", ["-e".to_string(), finder_script(path)]))
}

fn windows_protocol_handler(path: &Path, page: u64) -> Result<LaunchCommand, LaunchError> {
    let uri = file_uri(path, Platform::Windows, Some(page))?;
    Ok(LaunchCommand::new(
        "rundll32",
        ["url.dll,FileProtocolHandler".to_string(), uri],
    ))
}

/// The path must not pass through cmd.exe, which acts on `&`, `^` and `%VAR%`.
fn windows_explorer(path: &Path, _page: u64) -> Result<LaunchCommand, LaunchError> {
    Ok(LaunchCommand::new("explorer", [path_arg(path)]))
}

fn posix_xdg_open(path: &Path, _page: u64) -> Result<LaunchCommand, LaunchError> {
    Ok(LaunchCommand::new("xdg-open", [path_arg(path)]))
}

fn posix_gio_open_uri(path: &Path, _page: u64) -> Result<LaunchCommand, LaunchError> {
    let uri = file_uri(path, Platform::Posix, None)?;
    Ok(LaunchCommand::new("gio", ["open".to_string(), uri]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(platform: Platform) -> Vec<&'static str> {
        chain(platform).iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_chain_order_per_platform() {
        assert_eq!(names(Platform::MacOs), vec!["open-uri", "finder-script"]);
        assert_eq!(names(Platform::Windows), vec!["protocol-handler", "start"]);
        assert_eq!(names(Platform::Posix), vec!["xdg-open", "gio-open-uri"]);
    }

    #[test]
    fn test_every_chain_is_non_empty() {
        for platform in Platform::all() {
            assert!(!chain(*platform).is_empty(), "{platform}");
        }
    }

    #[test]
    fn test_macos_primary_carries_page() {
        let cmd = chain(Platform::MacOs)[0]
            .command(Path::new("/Users/ada/Documents/IMM_issues/2023_01.pdf"), 5)
            .unwrap();
        assert_eq!(cmd.program, "open");
        assert_eq!(
            cmd.args,
            vec!["file:///Users/ada/Documents/IMM_issues/2023_01.pdf#page=5"]
        );
    }

    #[test]
    fn test_macos_finder_script_uses_plain_path() {
        let cmd = chain(Platform::MacOs)[1]
            .command(Path::new("/Users/ada/Documents/IMM_issues/2023_01.pdf"), 5)
            .unwrap();
        assert_eq!(cmd.program, "osascript");
        assert_eq!(cmd.args[0], "-e");
        assert!(cmd.args[1].contains(
            "POSIX file \"/Users/ada/Documents/IMM_issues/2023_01.pdf\" as alias"
        ));
        assert!(!cmd.args[1].contains("page"));
    }

    #[test]
    fn test_finder_script_escapes_quotes() {
        let script = finder_script(Path::new("/tmp/say \"hi\".pdf"));
        assert!(script.contains(r#"POSIX file "/tmp/say \"hi\".pdf" as alias"#));
    }

    #[test]
    fn test_windows_steps() {
        let path = Path::new(r"C:\Users\ada\Documents\IMM_issues\1999_12.pdf");
        let primary = chain(Platform::Windows)[0].command(path, 3).unwrap();
        assert_eq!(primary.program, "rundll32");
        assert_eq!(
            primary.args,
            vec![
                "url.dll,FileProtocolHandler",
                "file:///C:/Users/ada/Documents/IMM_issues/1999_12.pdf#page=3"
            ]
        );

        let fallback = chain(Platform::Windows)[1].command(path, 3).unwrap();
        assert_eq!(fallback.program, "explorer");
        assert_eq!(
            fallback.args,
            vec![r"C:\Users\ada\Documents\IMM_issues\1999_12.pdf"]
        );
    }

    #[test]
    fn test_windows_fallback_keeps_shell_metacharacters_in_one_argument() {
        let path = Path::new(r"C:\Users\R&D\100%USERNAME%\IMM_issues\2023_01.pdf");
        let fallback = chain(Platform::Windows)[1].command(path, 1).unwrap();
        assert_ne!(fallback.program, "cmd");
        assert_eq!(
            fallback.args,
            vec![r"C:\Users\R&D\100%USERNAME%\IMM_issues\2023_01.pdf"]
        );
    }

    #[test]
    fn test_posix_steps() {
        let path = Path::new("/home/ada/Documents/IMM_issues/1999_12.pdf");
        let primary = chain(Platform::Posix)[0].command(path, 3).unwrap();
        assert_eq!(primary.program, "xdg-open");
        assert_eq!(primary.args, vec!["/home/ada/Documents/IMM_issues/1999_12.pdf"]);

        let fallback = chain(Platform::Posix)[1].command(path, 3).unwrap();
        assert_eq!(fallback.program, "gio");
        assert_eq!(
            fallback.args,
            vec!["open", "file:///home/ada/Documents/IMM_issues/1999_12.pdf"]
        );
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("macos".parse::<Platform>().unwrap(), Platform::MacOs);
        assert_eq!("Darwin".parse::<Platform>().unwrap(), Platform::MacOs);
        assert_eq!("WINDOWS".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Posix);
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_current_platform_has_chain() {
        assert!(!chain(Platform::current()).is_empty());
    }
}
