//! Validate a job catalog document and print its aggregates.
//!
//! Usage:
//!   catalog-validate --file catalogs/jobs.json
//!   catalog-validate < jobs.json

use anyhow::{Context, Result};
use careers::JobCatalog;
use careers::logging::init_tracing;
use clap::Parser;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate a job catalog against its schema and load rules")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Human-readable trace logging on stderr.
    #[arg(long)]
    debug: bool,
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for catalog JSON")?;
    }
    Ok(buf)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let raw = read_input(cli.file)?;
    let catalog = JobCatalog::from_json(&raw).context("job catalog is invalid")?;
    info!(key = %catalog.metadata().key, jobs = catalog.len(), "job catalog valid");
    println!("{}", serde_json::to_string_pretty(catalog.stats())?);
    Ok(())
}
