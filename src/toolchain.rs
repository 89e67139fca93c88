use crate::errors::GovReadyError;
use anyhow::Result;
use std::path::PathBuf;
use which::which;

/// External utilities every recognized command relies on.
pub const REQUIRED_TOOLS: &[&str] = &["oscap", "rpm", "yum"];

#[derive(Debug)]
pub struct ToolStatus {
    pub name: &'static str,
    pub path: Option<PathBuf>,
}

/// Abort on the first required tool missing from the system path.
pub fn verify_or_bail() -> Result<()> {
    for tool in REQUIRED_TOOLS {
        match which(tool) {
            Ok(path) => tracing::debug!("found {}: {:?}", tool, path),
            Err(_) => return Err(GovReadyError::Dependency((*tool).to_string()).into()),
        }
    }
    Ok(())
}

/// Resolve every required tool, reporting each rather than stopping at the
/// first failure. Used by `govready test`.
pub fn probe_tools() -> Vec<ToolStatus> {
    REQUIRED_TOOLS
        .iter()
        .copied()
        .map(|tool| ToolStatus {
            name: tool,
            path: which(tool).ok(),
        })
        .collect()
}
