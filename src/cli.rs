// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Overrides, Settings};
use crate::error::{Error, Result};
use crate::log::{self, Sink};
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary, Stages};

/// Scrape, clean, tag and chart CareerViet data job postings.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "job_scrape", version, about)]
pub struct Args {
    /// Fetch listing and detail pages into the raw CSV
    #[arg(long)]
    pub scrape: bool,

    /// Normalize, dedupe and filter the raw CSV
    #[arg(long)]
    pub clean: bool,

    /// Tag skills in the analyst CSV and count them
    #[arg(long)]
    pub analyze: bool,

    /// Render SVG figures from the filtered and skill-count CSVs
    #[arg(long)]
    pub visualize: bool,

    /// Run every stage in order
    #[arg(long)]
    pub all: bool,

    /// Search URL to start scraping from
    #[arg(long, env = "JOB_SCRAPE_URL")]
    pub url: Option<String>,

    /// Number of listing pages to fetch
    #[arg(long)]
    pub pages: Option<usize>,

    /// Cap on postings kept after merging pages
    #[arg(long)]
    pub max_jobs: Option<usize>,

    /// Input CSV for the first stage that reads from disk
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output CSV for the scrape stage
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Settings TOML (default: ./job_scrape.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn stages(&self) -> Stages {
        if self.all {
            return Stages::all();
        }
        Stages {
            scrape: self.scrape,
            clean: self.clean,
            analyze: self.analyze,
            visualize: self.visualize,
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            pages: self.pages,
            max_jobs: self.max_jobs,
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}

/// Run with already-parsed arguments.
pub fn run_with(args: &Args) -> Result<RunSummary> {
    let stages = args.stages();
    if !stages.any() {
        return Err(Error::Usage(s!(
            "nothing to do: pass one or more of --scrape, --clean, --analyze, --visualize, or --all"
        )));
    }
    let settings = Settings::load(args.config.as_deref())?;
    let mut progress = LogProgress::new();
    runner::run(stages, &settings, &args.overrides(), Some(&mut progress))
}

/// Parse `std::env::args`, set up logging and run.
pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(Sink::Stderr, args.verbose);

    let summary = run_with(&args)?;
    println!(
        "scraped={} processed={} data={} analyst={} tagged={} figures={}",
        summary.scraped,
        summary.processed,
        summary.data_jobs,
        summary.analyst_jobs,
        summary.tagged,
        summary.figures
    );
    for path in &summary.files_written {
        println!("  {}", path.display());
    }
    Ok(())
}
