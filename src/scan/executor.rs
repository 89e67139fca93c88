use super::builder::ScanRun;
use crate::errors::GovReadyError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub struct RunOutcome {
    /// Whether the engine reported the host compliant. A `false` here is
    /// scan data, not a tool failure.
    pub compliant: bool,
    pub result_path: PathBuf,
    pub report_path: PathBuf,
    pub fix_script_path: PathBuf,
}

/// Run the evaluation engine, then post-process its artifacts: widen read
/// permissions so non-privileged users can inspect results, and generate the
/// remediation script from the result file.
///
/// Only a launch failure is fatal; once the engine has run, every later step
/// degrades to a warning because the primary artifacts already exist.
pub fn execute(run: &ScanRun) -> Result<RunOutcome> {
    let invocation = run.invocation();
    tracing::info!("evaluating profile {} with {}", run.profile, invocation.program);
    tracing::debug!("engine invocation: {} {:?}", invocation.program, invocation.args);

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .map_err(|source| GovReadyError::EngineLaunch {
            program: invocation.program.clone(),
            source,
        })?;

    // oscap exits non-zero for a non-compliant host; that is a normal run
    let compliant = status.success();
    if !compliant {
        tracing::info!(
            "engine reported a non-compliant result (exit {:?})",
            status.code()
        );
    }

    widen_read_permissions(&run.result_path);
    widen_read_permissions(&run.report_path);

    if run.result_path.exists() {
        generate_fix_script(run);
    } else {
        tracing::warn!(
            "no result file at {:?}, skipping fix-script generation",
            run.result_path
        );
    }

    Ok(RunOutcome {
        compliant,
        result_path: run.result_path.clone(),
        report_path: run.report_path.clone(),
        fix_script_path: run.fix_script_path.clone(),
    })
}

fn widen_read_permissions(path: &Path) {
    if let Err(err) = add_group_other_read(path) {
        tracing::warn!("could not widen read permission on {:?}: {:#}", path, err);
    }
}

#[cfg(unix)]
fn add_group_other_read(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o044);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn add_group_other_read(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

fn generate_fix_script(run: &ScanRun) {
    let invocation = run.fix_invocation();
    tracing::debug!("fix invocation: {} {:?}", invocation.program, invocation.args);

    match Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
    {
        Ok(status) if status.success() => {
            tracing::info!("remediation script written to {:?}", run.fix_script_path);
        }
        Ok(status) => {
            tracing::warn!("fix-script generation exited with {:?}", status.code());
        }
        Err(err) => {
            tracing::warn!("fix-script generation failed to start: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use std::io::Write;
    use std::sync::Mutex;

    // PATH is process-global; serialize the tests that override it
    static PATH_LOCK: Mutex<()> = Mutex::new(());

    fn with_path<T>(path: &Path, f: impl FnOnce() -> T) -> T {
        let _guard = PATH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let old_path = std::env::var_os("PATH");
        unsafe { std::env::set_var("PATH", path) };
        let result = f();
        unsafe {
            match &old_path {
                Some(old) => std::env::set_var("PATH", old),
                None => std::env::remove_var("PATH"),
            }
        }
        result
    }

    fn test_run(scan_dir: &Path) -> ScanRun {
        let config = ProjectConfig {
            api_version: "0.1.0".to_string(),
            scan_dir: scan_dir.display().to_string(),
            default_profile: "test".to_string(),
            cpe_dictionary: "/x/cpe.xml".to_string(),
        };
        ScanRun::new(&config, None, "0615-1430")
    }

    #[test]
    fn test_launch_failure_is_fatal_and_skips_postprocessing() {
        let dir = tempfile::tempdir().unwrap();
        let run = test_run(&dir.path().join("scans"));

        // an empty PATH directory makes the engine unresolvable
        let result = with_path(dir.path(), || execute(&run));

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GovReadyError>(),
            Some(GovReadyError::EngineLaunch { .. })
        ));
        // post-processing never ran: no artifacts, no remediation script
        assert!(!run.result_path.exists());
        assert!(!run.fix_script_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_noncompliant_engine_exit_is_a_normal_outcome() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();

        // stand-in engine that launches fine but reports non-compliance
        let engine = bin.join("oscap");
        fs::write(&engine, "#!/bin/sh\nexit 2\n").unwrap();
        let mut perms = fs::metadata(&engine).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&engine, perms).unwrap();

        let run = test_run(&dir.path().join("scans"));
        let outcome = with_path(&bin, || execute(&run)).unwrap();

        assert!(!outcome.compliant);
    }

    #[cfg(unix)]
    #[test]
    fn test_widen_adds_group_other_read() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"<results/>").unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms).unwrap();

        add_group_other_read(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o044, 0o044);
        // owner bits untouched
        assert_eq!(mode & 0o700, 0o600);
    }

    #[test]
    fn test_widen_on_missing_file_is_nonfatal() {
        // must not panic; failure is reported as a warning by the caller
        widen_read_permissions(Path::new("/nonexistent/results.xml"));
    }
}
