// create-dataset entry point
use anyhow::{Context, Result};
use clap::Parser;
use engine::config::IndicatorSettings;
use engine::services::{default_output_path, DatasetService};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds a technical-indicator dataset from one column of a CSV file.
#[derive(Parser, Debug)]
#[command(name = "create-dataset", version, about)]
struct Args {
    /// Input CSV file with a header row
    csv_file: PathBuf,

    /// Name of the column holding the values
    column_name: String,

    /// Short SMA window, also the short EMA period [default: 24]
    #[arg(long)]
    short_sma: Option<usize>,

    /// Long SMA window, also the long EMA period [default: 168]
    #[arg(long)]
    long_sma: Option<usize>,

    /// Short RSI window [default: 12]
    #[arg(long)]
    short_rsi: Option<usize>,

    /// Long RSI window [default: 84]
    #[arg(long)]
    long_rsi: Option<usize>,

    /// JSON file with indicator periods; command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file [default: <csv-file> with `.csv` replaced by `_result.csv`]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let args = Args::parse();

    let base = match &args.config {
        Some(path) => IndicatorSettings::load_from_file(path)?,
        None => IndicatorSettings::default(),
    };
    let settings = base.with_overrides(args.short_sma, args.long_sma, args.short_rsi, args.long_rsi);

    let output = args.output.clone().unwrap_or_else(|| default_output_path(&args.csv_file));
    info!(input = %args.csv_file.display(), column = %args.column_name, output = %output.display(), "Creating dataset");

    let service = DatasetService::new(settings)?;
    let summary = service
        .run(&args.csv_file, &args.column_name, &output)
        .with_context(|| format!("Failed to create dataset from '{}'", args.csv_file.display()))?;

    info!(samples = summary.samples, rows = summary.rows, "Done");
    Ok(())
}
