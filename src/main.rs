//! rrgc - keep timestamped files by retention windows, delete the rest.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rrgc::Result;
use rrgc::app::AppContext;
use rrgc::cli::Cli;
use rrgc::cli::output::robot_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                // stdout may already carry the run report
                let response = robot_error(e.code(), e.to_string());
                eprintln!("{}", serde_json::to_string(&response).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    rrgc::cli::gc::run(&ctx, &cli.gc)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = if cli.debug {
        "debug,rrgc=trace"
    } else {
        "warn,rrgc=info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
