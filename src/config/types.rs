/// Resolved project configuration for one invocation, parsed from the
/// GovReadyfile. Every field is required; there is no partial fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub api_version: String,
    pub scan_dir: String,
    pub default_profile: String,
    pub cpe_dictionary: String,
}
