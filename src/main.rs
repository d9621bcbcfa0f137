use analytics::AgpEngine;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, OutputFormat};
use core_types::ReadingSet;
use std::path::{Path, PathBuf};
use tracing::info;

mod render;

/// The main entry point for the AGP report tool.
fn main() -> Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Summary(args) => handle_summary(args, &config),
        Commands::Profile(args) => handle_profile(args, &config),
        Commands::Report(args) => handle_report(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ambulatory glucose profile statistics from a continuous glucose monitor export.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults plus an optional ./agp.toml are used otherwise.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time in range, mean glucose, GMI and coefficient of variation.
    Summary(FileArgs),
    /// Per time-of-day median and 5/25/75/95th percentile bands.
    Profile(FileArgs),
    /// Full AGP report as JSON for a chart renderer.
    Report(ReportArgs),
}

#[derive(Parser)]
struct FileArgs {
    /// The exported workbook (.xlsx, .xls, .xlsb or .ods).
    file: PathBuf,

    /// How to print the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Parser)]
struct ReportArgs {
    /// The exported workbook (.xlsx, .xls, .xlsb or .ods).
    file: PathBuf,

    /// Where to write the JSON report. Prints to stdout when omitted.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn load(file: &Path, config: &Config) -> Result<ReadingSet> {
    loader::load_readings(file, &config.input)
        .with_context(|| format!("Failed to load readings from {}", file.display()))
}

fn handle_summary(args: FileArgs, config: &Config) -> Result<()> {
    let readings = load(&args.file, config)?;
    let summary = AgpEngine::new()
        .summarize(&readings)
        .context("Failed to compute summary")?;

    match args.format {
        OutputFormat::Table => {
            println!("AGP Summary");
            println!("{}", render::metrics_table(&summary));
            println!("Time in Range");
            println!("{}", render::time_in_range_table(&summary));
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "summary": summary,
                "gmi": summary.gmi(),
                "time_in_range": summary.range_segments(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }
    Ok(())
}

fn handle_profile(args: FileArgs, config: &Config) -> Result<()> {
    let readings = load(&args.file, config)?;
    let profile = AgpEngine::new()
        .circadian_profile(&readings)
        .context("Failed to compute circadian profile")?;

    match args.format {
        OutputFormat::Table => {
            println!("Ambulatory Glucose Profile");
            println!("{}", render::profile_table(&profile));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
    }
    Ok(())
}

fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let readings = load(&args.file, config)?;
    let report = AgpEngine::new()
        .report(&readings)
        .context("Failed to compute AGP report")?;
    let json = serde_json::to_string_pretty(&report)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "Report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
