use super::types::ProjectConfig;
use crate::errors::GovReadyError;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "GovReadyfile";

const KEY_API_VERSION: &str = "api-version";
const KEY_SCAN_DIR: &str = "scan-dir";
const KEY_PROFILE: &str = "profile";
const KEY_CPE: &str = "cpe";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the GovReadyfile from the working directory.
    pub fn load() -> Result<ProjectConfig> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<ProjectConfig> {
        if !path.exists() {
            return Err(GovReadyError::ConfigMissing(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Err(GovReadyError::ConfigMissing(path.display().to_string()).into());
        }

        Ok(Self::parse(&content)?)
    }

    /// Parse line-oriented `KEY = value` pairs. Only lines containing `=`
    /// contribute; `#` comments and blank lines are skipped; the value is the
    /// literal text after the first `=`. Last occurrence of a key wins.
    /// Values are plain strings, never interpreted or executed.
    fn parse(content: &str) -> Result<ProjectConfig, GovReadyError> {
        let mut pairs: HashMap<&str, &str> = HashMap::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            pairs.insert(key.trim(), value.trim());
        }

        Ok(ProjectConfig {
            api_version: Self::required(&pairs, KEY_API_VERSION)?,
            scan_dir: Self::required(&pairs, KEY_SCAN_DIR)?,
            default_profile: Self::required(&pairs, KEY_PROFILE)?,
            cpe_dictionary: Self::required(&pairs, KEY_CPE)?,
        })
    }

    fn required(
        pairs: &HashMap<&str, &str>,
        key: &'static str,
    ) -> Result<String, GovReadyError> {
        match pairs.get(key) {
            Some(value) if !value.is_empty() => Ok((*value).to_string()),
            _ => Err(GovReadyError::ConfigIncomplete(key)),
        }
    }
}
