use crate::config::DEFAULT_CONFIG_PATH;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub const DEFAULT_SCAN_DIR: &str = "scans";
pub const DEFAULT_PROFILE: &str = "test";
const DEFAULT_CPE: &str = "/usr/share/xml/scap/ssg/content/ssg-rhel7-cpe-dictionary.xml";

/// Scaffold the project layout in the working directory: the scan output
/// directory plus a default GovReadyfile. Idempotent; an existing
/// GovReadyfile is left untouched.
pub fn scaffold() -> Result<()> {
    scaffold_at(Path::new("."))
}

pub fn scaffold_at(root: &Path) -> Result<()> {
    let scan_dir = root.join(DEFAULT_SCAN_DIR);
    fs::create_dir_all(&scan_dir)
        .with_context(|| format!("failed to create scan directory: {:?}", scan_dir))?;

    let config_path = root.join(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        println!(
            "  {} {} already exists, leaving it in place",
            "•".yellow(),
            DEFAULT_CONFIG_PATH
        );
        return Ok(());
    }

    fs::write(&config_path, default_config_contents())
        .with_context(|| format!("failed to write {:?}", config_path))?;

    println!(
        "  {} created {} and {}/",
        "✓".green(),
        DEFAULT_CONFIG_PATH.bold(),
        DEFAULT_SCAN_DIR
    );
    Ok(())
}

fn default_config_contents() -> String {
    format!(
        "# GovReady project configuration\n\
         api-version = 0.1.0\n\
         scan-dir = {DEFAULT_SCAN_DIR}\n\
         profile = {DEFAULT_PROFILE}\n\
         cpe = {DEFAULT_CPE}\n"
    )
}
