//! Replay entry point.

use clap::Parser;
use std::process::ExitCode;
use vectorink_app::CliArgs;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();

    match vectorink_app::run_cli(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Replay failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
