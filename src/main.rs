//! brewsift - Coffee Subscription Survey Cleaner
//!
//! Filters a survey CSV export against the data-quality rules and reports
//! three interest statistics before writing the surviving rows back out.

mod config;
mod data;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::Options;
use data::{SurveyLoader, SurveyValidator, SurveyWriter};
use stats::StatsCalculator;

#[derive(Parser)]
#[command(name = "brewsift")]
#[command(about = "Cleans a coffee subscription survey CSV and reports interest statistics")]
#[command(version)]
struct Cli {
    /// Survey export to clean
    #[arg(required_unless_present = "config")]
    source: Option<PathBuf>,

    /// Where the cleaned rows are written (overwritten if present)
    #[arg(required_unless_present = "config")]
    destination: Option<PathBuf>,

    /// Read options from a JSON file instead of positional arguments
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log one diagnostic line per discarded row, plus row counts
    #[arg(short, long)]
    verbose: bool,

    /// Report percent interested in floating point instead of the legacy
    /// integer formula
    #[arg(long)]
    exact_percent: bool,
}

impl Cli {
    /// Resolve the final options: config file if given, CLI arguments
    /// otherwise, with the boolean flags merged on top.
    fn into_options(self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Options {
                // clap enforces both arguments when --config is absent
                source: self.source.clone().context("missing <SOURCE>")?,
                destination: self.destination.clone().context("missing <DESTINATION>")?,
                verbose: false,
                exact_percent: false,
            },
        };
        options.verbose |= self.verbose;
        options.exact_percent |= self.exact_percent;
        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "brewsift=debug"
    } else {
        "brewsift=info"
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder().with_env_filter(env).init();
}

fn main() -> Result<()> {
    let options = Cli::parse().into_options()?;
    init_logging(options.verbose);
    options.validate()?;

    let table = SurveyLoader::load(&options.source)
        .with_context(|| format!("reading {}", options.source.display()))?;
    info!("loaded {} rows from {}", table.len(), options.source.display());

    let validated = SurveyValidator::validate(table);
    info!("{} rows passed validation", validated.len());

    let summary = StatsCalculator::summarize(&validated)?;
    info!(
        "{} of {} kept rows want the subscription",
        summary.interested_rows, summary.total_rows
    );
    print!("{}", summary.render(options.exact_percent));

    SurveyWriter::write(&validated, &options.destination)
        .with_context(|| format!("writing {}", options.destination.display()))?;
    info!("wrote cleaned rows to {}", options.destination.display());

    Ok(())
}
