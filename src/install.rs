//! Idempotent "ensure installed" collaborators for the engine, its content
//! pack, and the repository definition. These run before orchestration and
//! are not part of the scan pipeline itself.

use crate::errors::GovReadyError;
use crate::lifecycle::Lifecycle;
use anyhow::{bail, Context, Result};
use std::fs;
use std::process::Command;

const SCANNER_PACKAGE: &str = "openscap-scanner";
const CONTENT_PACKAGE: &str = "scap-security-guide";
const REPO_PACKAGE: &str = "epel-release";
const REPO_RPM_URL: &str =
    "https://dl.fedoraproject.org/pub/epel/epel-release-latest-7.noarch.rpm";

pub fn ensure_scanner() -> Result<()> {
    ensure_package(SCANNER_PACKAGE)
}

pub fn ensure_content() -> Result<()> {
    ensure_package(CONTENT_PACKAGE)
}

/// Ensure the repository definition is installed, staging the downloaded
/// package in a temp directory that the lifecycle guard removes on every
/// exit path.
pub fn ensure_repo(lifecycle: &Lifecycle) -> Result<()> {
    if package_installed(REPO_PACKAGE) {
        tracing::info!("{} already installed", REPO_PACKAGE);
        return Ok(());
    }

    if which::which("curl").is_err() {
        return Err(GovReadyError::Dependency("curl".to_string()).into());
    }

    let staging = std::env::temp_dir().join(format!("govready-{}", std::process::id()));
    fs::create_dir_all(&staging)
        .with_context(|| format!("failed to create staging directory: {:?}", staging))?;
    lifecycle.register_temp_dir(&staging);

    let rpm_path = staging.join("epel-release.rpm");
    let rpm_arg = rpm_path.display().to_string();
    run_checked("curl", &["-sSfL", "-o", &rpm_arg, REPO_RPM_URL])?;
    run_checked("rpm", &["-Uvh", &rpm_arg])?;

    lifecycle.cleanup();
    Ok(())
}

fn ensure_package(package: &str) -> Result<()> {
    if package_installed(package) {
        tracing::info!("{} already installed", package);
        return Ok(());
    }

    tracing::info!("installing {}", package);
    run_checked("yum", &["install", "-y", package])
}

fn package_installed(package: &str) -> bool {
    Command::new("rpm")
        .args(["-q", package])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn run_checked(program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to launch {}", program))?;

    if !status.success() {
        bail!("{} exited with {:?}", program, status.code());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_package_reported_not_installed() {
        assert!(!package_installed("govready-definitely-not-a-package"));
    }
}
