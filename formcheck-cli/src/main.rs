mod cli;
mod commands;
mod error;
mod paths;
mod settings;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::cli::{Cli, Command};
use crate::commands::{run_config, run_field, run_validate};
use crate::error::CliError;
use crate::settings::load_config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = run(&cli);
    if let Err(e) = &result {
        log::error!("{}", e);
        eprintln!("error: {}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when the form is valid, 1 when it is not, 2 when it could not be checked.
fn exit_status(result: &Result<bool, CliError>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn run(cli: &Cli) -> Result<bool, CliError> {
    let config = load_config(cli.config.as_deref())?;
    match &cli.command {
        Command::Validate(args) => run_validate(args, &config),
        Command::Field(args) => run_field(args, &config),
        Command::Config => run_config(&config).map(|()| true),
    }
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logging is best effort: without a writable log file the CLI runs silently.
fn init_logging(cli: &Cli) {
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => {
            paths::rotate_logs();
            let Some(path) = paths::log_file() else { return };
            if let Some(dir) = path.parent() {
                let _ = std::fs::create_dir_all(dir);
            }
            path
        }
    };

    let Ok(file) = File::create(&path) else { return };
    let _ = WriteLogger::init(level_filter(cli.verbose), Config::default(), file);
}
