mod app;
mod cli;
mod config;
mod errors;
mod init;
mod install;
mod lifecycle;
mod scan;
mod toolchain;
mod utils;

use clap::Parser;

fn main() {
    let cli = cli::args::Cli::parse();
    let lifecycle = lifecycle::Lifecycle::install();

    let code = match app::run(cli, &lifecycle) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("fatal: {:#}", err);
            1
        }
    };

    // process::exit skips Drop, so release transient resources explicitly
    lifecycle.cleanup();
    std::process::exit(code);
}
