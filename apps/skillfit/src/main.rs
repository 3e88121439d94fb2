mod cli;
mod config;
mod errors;
mod loader;
mod models;
mod report;
mod scoring;
mod state;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::errors::AppError;
use crate::loader::load_matrix;
use crate::report::{render_json, render_text};
use crate::state::AppState;

fn main() -> Result<()> {
    // Argument errors exit with clap's own status (2)
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting skillfit v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(&config, &cli);
    info!(
        backend = state.fit_scorer.backend(),
        path = %cli.csv_path.display(),
        "Scorer initialized"
    );

    match run(&cli, &state) {
        Ok(output) => {
            print!("{output}");
            info!("Done");
            Ok(())
        }
        Err(e) => {
            eprintln!("error[{}]: {e}", e.code());
            eprintln!("\n{}", e.hint());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, state: &AppState) -> Result<String, AppError> {
    let rows = load_matrix(&cli.csv_path, &state.scoring)?;
    let result = state.fit_scorer.score(&rows)?;
    info!(
        pct_fit = result.pct_fit_display(),
        core_gap_present = result.core_gap_present,
        "Scoring complete"
    );

    match cli.format {
        OutputFormat::Text => Ok(render_text(&result, &state.report)),
        OutputFormat::Json => render_json(&result, &state.report).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}
