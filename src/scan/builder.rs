use crate::config::ProjectConfig;
use std::path::{Path, PathBuf};

pub const ENGINE: &str = "oscap";

/// Fixed location of the compliance content bundle consumed by the engine.
/// A read-only external resource, not project configuration.
pub const SCAP_CONTENT: &str = "/usr/share/xml/scap/ssg/content/ssg-rhel7-ds.xml";

/// One execution of the evaluation engine. All artifact paths derive from
/// `(scan_dir, profile, suffix)`; existing files are overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRun {
    pub profile: String,
    pub suffix: String,
    pub result_path: PathBuf,
    pub report_path: PathBuf,
    pub fix_script_path: PathBuf,
    cpe_dictionary: String,
}

/// A structured external-process invocation: program plus explicit argument
/// vector, never an interpolated shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ScanRun {
    /// A non-empty command-line override takes precedence over the
    /// configured default profile.
    ///
    /// The suffix has minute granularity, so runs started within the same
    /// minute collide on artifact names. Known limitation of the naming
    /// scheme; no extra entropy is added.
    pub fn new(config: &ProjectConfig, profile_override: Option<&str>, suffix: &str) -> Self {
        let profile = match profile_override {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => config.default_profile.clone(),
        };

        let stem = format!("{profile}-results-{suffix}");
        let scan_dir = Path::new(&config.scan_dir);

        Self {
            result_path: scan_dir.join(format!("{stem}.xml")),
            report_path: scan_dir.join(format!("{stem}.html")),
            // the fix script lands in the working directory, not scan_dir
            fix_script_path: PathBuf::from(format!("{profile}-fix-{suffix}.sh")),
            profile,
            suffix: suffix.to_string(),
            cpe_dictionary: config.cpe_dictionary.clone(),
        }
    }

    /// The evaluation command: run the named profile against the content
    /// bundle, writing the machine-readable result and the HTML report.
    pub fn invocation(&self) -> EngineInvocation {
        EngineInvocation {
            program: ENGINE.to_string(),
            args: vec![
                "xccdf".to_string(),
                "eval".to_string(),
                "--profile".to_string(),
                self.profile.clone(),
                "--results".to_string(),
                self.result_path.display().to_string(),
                "--report".to_string(),
                self.report_path.display().to_string(),
                "--cpe".to_string(),
                self.cpe_dictionary.clone(),
                SCAP_CONTENT.to_string(),
            ],
        }
    }

    /// TestResult identifier the engine records for this profile, needed to
    /// select the result when generating the remediation script.
    pub fn result_id(&self) -> String {
        format!("xccdf_org.open-scap_testresult_{}", self.profile)
    }

    /// The remediation-generation command, fed by the result artifact.
    pub fn fix_invocation(&self) -> EngineInvocation {
        EngineInvocation {
            program: ENGINE.to_string(),
            args: vec![
                "xccdf".to_string(),
                "generate".to_string(),
                "fix".to_string(),
                "--result-id".to_string(),
                self.result_id(),
                "--output".to_string(),
                self.fix_script_path.display().to_string(),
                self.result_path.display().to_string(),
            ],
        }
    }
}
