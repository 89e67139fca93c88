use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "govready")]
#[command(about = "Compliance scan orchestrator for OpenSCAP", version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Debug output
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tool version
    Version,

    /// Scaffold the project layout and a default GovReadyfile
    Init,

    /// Report availability of the required external tools
    Test,

    /// Ensure the OpenSCAP scanner package is installed
    InstallScanner,

    /// Ensure the SCAP content pack is installed
    InstallContent,

    /// Ensure the package repository definition is installed
    InstallRepo,

    /// List the profiles available in the SCAP content bundle
    Profiles,

    /// Run a compliance scan against this host
    Scan {
        /// Profile to evaluate (defaults to the GovReadyfile profile)
        profile: Option<String>,
    },
}
