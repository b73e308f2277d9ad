use crate::commands::CmdResult;
use crate::config::OpenerConfig;
use crate::error::Result;
use crate::location;
use crate::model::ValidatedRequest;

/// Resolves the issue path without checking or opening it.
pub fn run(config: &OpenerConfig, req: &ValidatedRequest) -> Result<CmdResult> {
    let path = location::resolve(&config.root, req)?;
    Ok(CmdResult::default().with_paths(vec![path]))
}
