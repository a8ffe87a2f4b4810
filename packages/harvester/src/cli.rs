//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{parse_header, HarvestConfig};
use crate::error::{HarvesterError, Result};
use crate::export::save_csv;
use crate::harvester::harvest_with_progress;
use crate::http::HttpPageSource;
use crate::types::{HarvestReport, StopReason};

/// Roll-call Harvester - Scrape House roll-call votes into CSV.
#[derive(Parser)]
#[command(name = "rollcall-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every listing page and export the votes to CSV.
    Harvest {
        /// Output CSV file, overwritten if it exists (default: votes.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Paginated listing URL (default: https://clerk.house.gov/Votes/MemberVotes)
        #[arg(long)]
        listing_url: Option<String>,

        /// Base URL for vote detail links (default: https://clerk.house.gov/Votes)
        #[arg(long = "votes-url")]
        votes_url: Option<String>,

        /// Pages with fewer records than this count as short (default: 10)
        #[arg(long)]
        threshold: Option<usize>,

        /// User-Agent header sent with every request
        #[arg(long)]
        user_agent: Option<String>,

        /// Extra request header as "Name: value" (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Session year used in detail links (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Harvest {
            output,
            listing_url,
            votes_url,
            threshold,
            user_agent,
            headers,
            year,
        } => {
            let mut config = HarvestConfig::default();
            if let Some(output) = output {
                config = config.with_output(output);
            }
            if let Some(url) = listing_url {
                config = config.with_listing_url(url);
            }
            if let Some(url) = votes_url {
                config = config.with_votes_base_url(url);
            }
            if let Some(threshold) = threshold {
                config = config.with_page_size_threshold(threshold);
            }
            if let Some(user_agent) = user_agent {
                config = config.with_user_agent(user_agent);
            }
            for raw in &headers {
                let (name, value) = parse_header(raw)?;
                config = config.with_header(name, value);
            }
            if let Some(year) = year {
                config = config.with_year(year);
            }
            harvest_command(&config)
        }
    }
}

/// Execute the harvest command.
fn harvest_command(config: &HarvestConfig) -> Result<()> {
    // Validate inputs before making HTTP requests
    config.validate()?;
    validate_output_dir(&config.output)?;

    let source = HttpPageSource::from_config(config)?;

    println!(
        "{} {} into {}",
        style("Harvesting").bold(),
        style(&config.listing_url).cyan(),
        style(config.output.display()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Fetching page 1...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = harvest_with_progress(&source, config, |page, records| {
        pb.set_message(format!("Page {page}: {records} votes, fetching page {}...", page + 1));
    });

    pb.set_message("Saving CSV...");
    let output_path = match save_csv(&report.entries, &config.output) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    print_summary(&report);

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    if let StopReason::TransportFailure { page, error } = &report.stop {
        println!();
        println!(
            "{} page {} could not be fetched: {}",
            style("Warning:").yellow().bold(),
            page,
            error
        );
        println!("  The export above contains only the pages fetched before the failure.");
    }

    Ok(())
}

/// Refuse to start when the output file could not be created.
fn validate_output_dir(output: &Path) -> Result<()> {
    let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !dir.exists() {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", dir.display()),
        )));
    }
    if !dir.is_dir() {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not inside a directory: {}", dir.display()),
        )));
    }
    Ok(())
}

fn print_summary(report: &HarvestReport) {
    println!("  Votes: {}", style(report.entries.len()).green());
    println!("  Pages fetched: {}", report.pages_fetched);

    if !report.skipped.is_empty() {
        println!(
            "  Skipped records: {}",
            style(report.skipped.len()).yellow().bold()
        );
        for (reason, count) in report.skip_summary() {
            println!("    {count} x {reason}");
        }
    }

    match &report.stop {
        StopReason::EndOfData { page } => {
            println!("  Stopped: end of data at page {page}");
        }
        StopReason::TransportFailure { page, .. } => {
            println!("  Stopped: {} at page {page}", style("fetch failed").red());
        }
    }
}
