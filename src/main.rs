//! `aromecast` CLI
//!
//! Looks up a French city, fetches the hourly Météo-France AROME forecast
//! for it, and prints current conditions, a temperature trend, and the
//! hour-by-hour detail table.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aromecast::{AromecastConfig, AromecastError, MeteoApiClient, PreviewService, RenderResult};

/// Hourly Météo-France AROME forecast preview
#[derive(Parser)]
#[command(name = "aromecast")]
#[command(author, version, about = "Hourly Météo-France AROME forecast preview", long_about = None)]
struct Cli {
    /// City in France to look up (defaults to the configured city)
    city: Option<String>,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AromecastConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config, cli.verbose);

    let city = cli
        .city
        .unwrap_or_else(|| config.defaults.city.clone());

    // Display metadata, emitted once before the first render
    println!("🇫🇷 Météo-France Hourly Preview");
    println!("Data Source: Météo-France AROME (High Resolution 1.3km)");
    println!();

    let client = match MeteoApiClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return ExitCode::FAILURE;
        }
    };

    match PreviewService::render_for_city(&client, &city).await {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match &err {
                AromecastError::CityNotFound { .. } | AromecastError::Validation { .. } => {
                    eprintln!("⚠️  {}", err.user_message());
                }
                _ => {
                    eprintln!("Error: {}", err.user_message());
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Print the rendered views for one city lookup
fn print_result(result: &RenderResult) {
    println!("{}", result.banner());
    println!();

    if let Some(metrics) = result.metrics_text() {
        println!("{metrics}");
        println!();
    }

    println!("Temperature Trend (24h)");
    println!("{}", result.temperature_sparkline());
    println!();

    println!("Hour-by-Hour Detail");
    print!("{}", result.table_text());
}

/// Initialize the tracing subscriber from configuration
///
/// `RUST_LOG` wins over the configured level; `--verbose` bumps the
/// default to debug. Logs go to stderr so the rendered views own stdout.
fn init_logging(config: &AromecastConfig, verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
