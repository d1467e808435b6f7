//! CLI entry point for The White Box.
//!
//! `aggregate` turns the raw trip dataset into the zone summary table, and
//! `serve` runs the dashboard over that table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use white_box::aggregator::{ZoneCoordinates, aggregate_with};
use white_box::fetch::{BasicClient, load_source};
use white_box::output::{log_summary, write_outputs};
use white_box::parser::read_trips;
use white_box::presenter::{self, source_for_path};

#[derive(Parser)]
#[command(name = "white_box")]
#[command(about = "Per-zone delivery statistics and the dashboard that explains them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate raw trips into the zone summary table
    Aggregate {
        /// Path or URL of the raw trip CSV
        #[arg(short, long, value_name = "FILE_OR_URL", default_value = "gig_dataset.csv")]
        input: String,

        /// CSV file to write the summary table to (overwritten)
        #[arg(short, long, default_value = "zone_ui_data.csv")]
        output: String,

        /// Optional: also write the table as a JSON array of records
        #[arg(long)]
        json: Option<String>,

        /// Optional: JSON file replacing the built-in zone coordinates
        #[arg(long)]
        coords: Option<String>,
    },
    /// Serve the dashboard over a zone table (CSV) or zone profiles (JSON)
    Serve {
        /// Zone summary CSV or zone profile JSON
        #[arg(short, long, default_value = "zone_ui_data.csv")]
        data: String,

        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:5000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _log_guard = init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate {
            input,
            output,
            json,
            coords,
        } => {
            run_aggregate(&input, &output, json.as_deref(), coords.as_deref()).await?;
        }
        Commands::Serve { data, addr } => {
            let source = source_for_path(&data);
            presenter::serve(&addr, source.as_ref()).await?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/white_box.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("white_box.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

/// Loads the raw trips, aggregates them per zone and writes the table.
///
/// Nothing is written unless every trip parses and every zone has
/// coordinates.
#[tracing::instrument]
async fn run_aggregate(
    input: &str,
    output: &str,
    json: Option<&str>,
    coords: Option<&str>,
) -> Result<()> {
    let coordinates = match coords {
        Some(path) => ZoneCoordinates::load(path)?,
        None => ZoneCoordinates::builtin(),
    };

    let bytes = load_source(&BasicClient::new(), input).await?;
    let trips = read_trips(bytes.as_slice())?;
    info!(trips = trips.len(), "Trips loaded");

    let table = aggregate_with(&trips, &coordinates)?;
    log_summary(&table);

    write_outputs(output, json.map(Path::new), &table)?;

    info!(zones = table.len(), output, "Zone table written");
    Ok(())
}
