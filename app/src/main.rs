// In app/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use backtester::{print_report, Backtester};
use clap::{Parser, Subcommand};

mod report_files;
use crate::report_files::FileReportSink;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A trend-following crossover backtester.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a historical backtest over a daily-bar CSV price file.
    Backtest {
        /// Path to the price file (headerless CSV: YYYYMMDD,open,high,low,close).
        #[arg(short, long)]
        data: PathBuf,

        /// Directory for the trade, equity, and metrics logs.
        #[arg(short, long, default_value = "logs")]
        output: PathBuf,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = app_config::load_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.app.log_level)),
        )
        .init();

    tracing::info!(environment = %settings.app.environment, "starting backtester");

    match cli.command {
        Commands::Backtest { data, output } => {
            handle_backtest(&settings, data, output)?;
        }
    }

    tracing::info!("backtester has finished successfully.");

    Ok(())
}

/// Handles the logic for the `backtest` subcommand.
fn handle_backtest(settings: &app_config::Settings, data: PathBuf, output: PathBuf) -> Result<()> {
    // --- 1. Load Data ---
    let bars = market_data::load_bars(&data)?;

    // --- 2. Instantiate All Components ---
    let mut backtester = Backtester::new(
        settings.strategy.clone(),
        settings.risk.clone(),
        settings.simulation.clone(),
    );
    let mut sink = FileReportSink::create(&output)?;

    // --- 3. Run and Report ---
    let (report, trades, _equity_curve) = backtester.run(&bars, &mut sink)?;
    sink.finish()?;

    tracing::info!(
        trades = trades.len(),
        output = %output.display(),
        "run logs written"
    );
    print_report(&report);

    Ok(())
}
