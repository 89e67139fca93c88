use crate::{
    cli::args::{Cli, Commands},
    config::ConfigLoader,
    init, install,
    lifecycle::Lifecycle,
    scan::{self, executor, ScanRun},
    toolchain,
    utils::{logging, time},
};
use anyhow::Result;
use colored::Colorize;

/// Route the parsed command line to its handler. Returns the process exit
/// code; every fatal error propagates to `main` as an `Err`.
pub fn run(cli: Cli, lifecycle: &Lifecycle) -> Result<i32> {
    let level = logging::level_from_cli(&cli);
    logging::init(level)?;

    match cli.command {
        Commands::Version => {
            println!("govready {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Commands::Test => Ok(report_tools()),
        Commands::Init => {
            toolchain::verify_or_bail()?;
            init::scaffold()?;
            Ok(0)
        }
        Commands::InstallScanner => {
            toolchain::verify_or_bail()?;
            install::ensure_scanner()?;
            Ok(0)
        }
        Commands::InstallContent => {
            toolchain::verify_or_bail()?;
            install::ensure_content()?;
            Ok(0)
        }
        Commands::InstallRepo => {
            toolchain::verify_or_bail()?;
            install::ensure_repo(lifecycle)?;
            Ok(0)
        }
        Commands::Profiles => {
            toolchain::verify_or_bail()?;
            scan::list_profiles()
        }
        Commands::Scan { profile } => {
            toolchain::verify_or_bail()?;
            run_scan(profile.as_deref())
        }
    }
}

/// The orchestration pipeline: config load, run construction, engine
/// execution, artifact post-processing. Compliance failure is scan data, so
/// the exit code stays 0 whenever the engine actually ran.
fn run_scan(profile_override: Option<&str>) -> Result<i32> {
    let config = ConfigLoader::load()?;
    tracing::info!(
        "loaded GovReadyfile (scan dir {}, default profile {})",
        config.scan_dir,
        config.default_profile
    );

    let suffix = time::run_suffix();
    let run = ScanRun::new(&config, profile_override, &suffix);
    let outcome = executor::execute(&run)?;

    if outcome.compliant {
        println!("  {} host is compliant with {}", "✓".green(), run.profile.bold());
    } else {
        println!(
            "  {} host is not compliant with {}",
            "✗".red(),
            run.profile.bold()
        );
    }
    println!("  results: {}", outcome.result_path.display());
    println!("  report:  {}", outcome.report_path.display());
    println!("  fixes:   {}", outcome.fix_script_path.display());

    Ok(0)
}

fn report_tools() -> i32 {
    println!("{}", "Tool availability:".cyan().bold());

    let mut missing = 0;
    for status in toolchain::probe_tools() {
        match status.path {
            Some(path) => println!(
                "  {} {} {}",
                "✓".green(),
                status.name.green().bold(),
                path.display().to_string().dimmed()
            ),
            None => {
                missing += 1;
                println!("  {} {}", "✗".red(), status.name.red().bold());
            }
        }
    }

    if missing == 0 { 0 } else { 1 }
}
