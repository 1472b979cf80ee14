//! Query the job catalog the way the careers page does.
//!
//! Usage:
//!   job-search --search weld
//!   job-search --category Electrical --type Apprentice --json
//!   job-search --stats
//!
//! An empty result is not an error; the summary line reports zero matches.

use anyhow::Result;
use careers::filter::ALL_LABEL;
use careers::logging::init_tracing;
use careers::{CareerPortal, FilterState, JobCard, load_catalog};
use clap::Parser;
use std::io::{Write, stdout};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "job-search")]
#[command(about = "Search and filter open positions")]
struct Cli {
    /// Case-insensitive text matched against title, description and location.
    #[arg(long, default_value = "")]
    search: String,
    /// Category label, or "All".
    #[arg(long, default_value = ALL_LABEL)]
    category: String,
    /// Employment type label (Full-time, Contract, Apprentice), or "All".
    #[arg(long = "type", default_value = ALL_LABEL)]
    employment_type: String,
    /// Catalog document to use instead of the bundled one.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Emit one JSON object per visible job.
    #[arg(long, conflicts_with = "stats")]
    json: bool,
    /// Print catalog aggregates instead of jobs.
    #[arg(long)]
    stats: bool,
    /// Human-readable trace logging on stderr.
    #[arg(long)]
    debug: bool,
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

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let mut out = stdout().lock();

    if cli.stats {
        serde_json::to_writer_pretty(&mut out, catalog.stats())?;
        writeln!(out)?;
        return Ok(());
    }

    let state = FilterState::from_raw(&cli.search, &cli.category, &cli.employment_type);
    let mut portal = CareerPortal::with_state(&catalog, state);
    let summary = portal.summary();
    info!(
        showing = summary.showing,
        total = summary.total,
        "filtered job catalog"
    );

    if cli.json {
        for card in portal.cards() {
            serde_json::to_writer(&mut out, &card)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    writeln!(out, "{summary}")?;
    for card in portal.cards() {
        write_card(&mut out, &card)?;
    }
    if summary.showing == 0 {
        writeln!(out, "No positions found. Try adjusting your search or filters.")?;
    }
    Ok(())
}

fn write_card(out: &mut impl Write, card: &JobCard<'_>) -> Result<()> {
    writeln!(out)?;
    let badge = if card.priority { " [PRIORITY]" } else { "" };
    writeln!(out, "{}{}", card.title, badge)?;
    writeln!(
        out,
        "  {} | {} | {}",
        card.category, card.location, card.employment_type
    )?;
    writeln!(out, "  {}", card.description)?;
    if !card.requirements.is_empty() {
        writeln!(out, "  {}", card.requirements.join(" · "))?;
    }
    writeln!(out, "  Apply: {}", card.apply_url)?;
    Ok(())
}
