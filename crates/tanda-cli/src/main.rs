//! Command-line harness for the normalizers: read one raw payload from a
//! JSON file, normalize it, print the normalized record as pretty JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tanda_normalize::{
    normalize_availability, normalize_destination, normalize_location, normalize_product,
    RawAvailability, RawDestination, RawLocation, RawProduct, TracingSink,
};

#[derive(Debug, Parser)]
#[command(name = "tanda-cli")]
#[command(about = "Normalize raw tours-and-activities API payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a raw product payload.
    Product { file: PathBuf },
    /// Normalize a raw destination payload.
    Destination { file: PathBuf },
    /// Normalize a raw availability calendar payload.
    Availability { file: PathBuf },
    /// Normalize a raw location payload.
    Location { file: PathBuf },
}

impl Commands {
    fn kind(&self) -> PayloadKind {
        match self {
            Commands::Product { .. } => PayloadKind::Product,
            Commands::Destination { .. } => PayloadKind::Destination,
            Commands::Availability { .. } => PayloadKind::Availability,
            Commands::Location { .. } => PayloadKind::Location,
        }
    }

    fn file(&self) -> &Path {
        match self {
            Commands::Product { file }
            | Commands::Destination { file }
            | Commands::Availability { file }
            | Commands::Location { file } => file,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PayloadKind {
    Product,
    Destination,
    Availability,
    Location,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let file = cli.command.file();
    let payload = fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let output = normalize_payload(cli.command.kind(), &payload)?;
    println!("{output}");
    Ok(())
}

/// Parses `payload` as the raw shape for `kind` and renders the normalized
/// record. Malformed JSON is the only error here; normalization itself
/// never fails.
fn normalize_payload(kind: PayloadKind, payload: &str) -> anyhow::Result<String> {
    let sink = TracingSink;
    let record = match kind {
        PayloadKind::Product => {
            let raw: RawProduct =
                serde_json::from_str(payload).context("parsing raw product JSON")?;
            serde_json::to_value(normalize_product(&raw, &sink))?
        }
        PayloadKind::Destination => {
            let raw: RawDestination =
                serde_json::from_str(payload).context("parsing raw destination JSON")?;
            serde_json::to_value(normalize_destination(&raw, &sink))?
        }
        PayloadKind::Availability => {
            let raw: RawAvailability =
                serde_json::from_str(payload).context("parsing raw availability JSON")?;
            serde_json::to_value(normalize_availability(&raw, &sink))?
        }
        PayloadKind::Location => {
            let raw: RawLocation =
                serde_json::from_str(payload).context("parsing raw location JSON")?;
            serde_json::to_value(normalize_location(&raw, &sink))?
        }
    };
    Ok(serde_json::to_string_pretty(&record)?)
}
