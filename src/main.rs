use clap::Parser;
use gridbot::{SimulationConfig, run_session};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridbot")]
#[command(about = "Drive robots around a grid room with L/R/F commands")]
struct Args {
    /// JSON configuration file (max_robots, default_room, case_insensitive_commands)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the maximum number of robots
    #[arg(long)]
    max_robots: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config.as_deref().map(SimulationConfig::load) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
        None => SimulationConfig::default(),
    };
    if let Some(max) = args.max_robots {
        config.max_robots = max;
    }

    match run_session(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "session failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
