use crate::commands::{CmdResult, StepInfo};
use crate::strategy::{chain, Platform};

/// Lists the launch steps tried for each of `platforms`, in order.
pub fn run(platforms: &[Platform]) -> CmdResult {
    let steps = platforms
        .iter()
        .flat_map(|&platform| {
            chain(platform)
                .iter()
                .enumerate()
                .map(move |(i, step)| StepInfo {
                    platform,
                    position: i + 1,
                    name: step.name,
                    honors_page: step.honors_page,
                })
        })
        .collect();
    CmdResult::default().with_steps(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_platform() {
        let res = run(&[Platform::MacOs]);
        assert_eq!(res.steps.len(), 2);
        assert_eq!(res.steps[0].name, "open-uri");
        assert_eq!(res.steps[0].position, 1);
        assert!(res.steps[0].honors_page);
        assert_eq!(res.steps[1].name, "finder-script");
        assert!(!res.steps[1].honors_page);
    }

    #[test]
    fn test_all_platforms_in_order() {
        let res = run(Platform::all());
        let platforms: Vec<Platform> = res.steps.iter().map(|s| s.platform).collect();
        assert_eq!(
            platforms,
            vec![
                Platform::MacOs,
                Platform::MacOs,
                Platform::Windows,
                Platform::Windows,
                Platform::Posix,
                Platform::Posix
            ]
        );
    }
}
