use std::{io, process::ExitCode};

use clap::Parser;
use msgsig_cli::{Cli, Outcome, config::Config, logging, run};

const EXIT_FAULT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(err) = logging::init(&config.log_filter) {
        eprintln!("warning: {err:#}");
    }
    tracing::debug!(?config, "configuration loaded");

    match run(cli.command, &config, io::stdin().lock(), io::stdout().lock(), io::stderr()) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAULT)
        }
    }
}
