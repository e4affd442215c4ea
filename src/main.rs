//! mkvattach binary entry point.

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;

use mkvattach::cli::{Cli, CliError};
use mkvattach::config::{ConfigError, ConfigManager};
use mkvattach::logging;
use mkvattach::runner::{JobRunner, RunnerError};

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    banner();

    let cancelled = Arc::new(AtomicBool::new(false));
    {
        let flag = cancelled.clone();
        if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
            tracing::warn!("could not install interrupt handler: {}", e);
        }
    }

    match run(&cli, cancelled) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Runner(RunnerError::Cancelled)) => {
            eprintln!("> Execution cancelled by user");
            ExitCode::from(130)
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn banner() {
    println!("mkvattach v{}", mkvattach::version());
}

fn run(cli: &Cli, cancelled: Arc<AtomicBool>) -> Result<(), AppError> {
    let mut config = ConfigManager::new(&cli.config);
    config.load_or_create()?;
    tracing::debug!("using config {}", config.path().display());

    let jobs = cli.to_jobs()?;
    tracing::info!("{} batch(es) to process", jobs.len());

    let runner = JobRunner::new(config.settings().clone(), cancelled);
    runner.run(&jobs)?;

    tracing::info!("done");
    Ok(())
}
