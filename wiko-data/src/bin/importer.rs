use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wiko_data::{TelemetryLoader, TemplateWriter};

/// Import telemetry CSV exports from the tracking units.
///
/// The CSV file should have the following columns:
/// - athlete_id: Numeric id of the athlete
/// - session_date: ISO date of the session (e.g., 2025-07-28)
/// - total_distance_m: Total distance covered in meters
/// - hsr_distance_m: High-speed running distance in meters
/// - top_speed_kmh: Top speed in km/h
/// - player_load: Accumulated player load (may be empty)
/// - sprint_count: Number of sprints (may be empty)
///
/// Metric columns accept both dot and comma decimal separators.
#[derive(Parser, Debug)]
#[command(name = "wiko-data-importer")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a telemetry CSV export and report what it contains
    Import {
        /// Path to the CSV file containing telemetry data
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Write a blank telemetry CSV template with one example row
    Template {
        /// Path to write the template to
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    match args.command {
        Command::Import { file } => import(&file),
        Command::Template { file } => template(&file),
    }
}

fn import(file: &Path) -> Result<()> {
    println!("Loading telemetry from: {}", file.display());

    let records = TelemetryLoader::load_from_path(file)
        .with_context(|| format!("Failed to load telemetry from: {}", file.display()))?;

    println!("Parsed {} telemetry records", records.len());

    for (athlete_id, count) in TelemetryLoader::count_by_athlete(&records) {
        println!("  athlete {athlete_id}: {count} records");
    }

    Ok(())
}

fn template(file: &Path) -> Result<()> {
    TemplateWriter::write_to_path(file)
        .with_context(|| format!("Failed to write template to: {}", file.display()))?;

    println!("Wrote telemetry template to: {}", file.display());

    Ok(())
}
