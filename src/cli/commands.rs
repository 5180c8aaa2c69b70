//! Command implementation for the political donors CLI
//!
//! Sets up logging, layers configuration, runs the processor and prints a
//! short summary once both reports are on disk.

use crate::Result;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::DEFAULT_LOG_FILTER;
use crate::processor::{ContributionProcessor, ProcessingStats};
use colored::*;
use indicatif::HumanDuration;
use tracing::{debug, info, warn};

/// Main command runner
///
/// 1. Set up logging
/// 2. Load configuration (defaults, environment, arguments)
/// 3. Process the input into both reports
/// 4. Print a summary to stderr
pub fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging();

    info!("Starting political donors processor");
    debug!("Command line arguments: {:?}", args);

    let config = Config::load_layered(
        args.input_path,
        args.zip_output_path,
        args.date_output_path,
    )?;

    let stats = ContributionProcessor::new(config.clone())
        .run()
        .inspect_err(|e| {
            if e.is_pre_run() {
                warn!("Nothing was written: {}", e);
            } else {
                warn!("Run stopped part way; the zip report may be incomplete: {}", e);
            }
        })?;

    if let Ok(json) = serde_json::to_string(&stats) {
        debug!("Run statistics: {}", json);
    }

    print_summary(&config, &stats);
    Ok(stats)
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the default filter. Safe to call more than once.
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized");
    }
}

/// Human-readable run summary on stderr, leaving stdout untouched
fn print_summary(config: &Config, stats: &ProcessingStats) {
    let validation = &stats.validation;

    eprintln!();
    eprintln!("{}", "Contribution processing complete".bright_green().bold());
    eprintln!(
        "  {} {} ({} accepted, {} ineligible, {} malformed)",
        "Lines read:".bright_cyan(),
        validation.lines_read.to_string().bright_white().bold(),
        validation.accepted,
        validation.ineligible(),
        validation.malformed_lines
    );
    eprintln!(
        "  {} {} lines, {} groups -> {}",
        "By zip:".bright_cyan(),
        stats.zip_lines_written,
        stats.zip_groups,
        config.paths.zip_output.display()
    );
    eprintln!(
        "  {} {} lines -> {}",
        "By date:".bright_cyan(),
        stats.date_lines_written,
        config.paths.date_output.display()
    );
    eprintln!(
        "  {} {}",
        "Time:".bright_cyan(),
        HumanDuration(stats.processing_time)
    );

    if stats.lossy_reported_lines > 0 {
        eprintln!(
            "  {} {} reported lines had invalid UTF-8 replaced",
            "Warning:".bright_yellow().bold(),
            stats.lossy_reported_lines
        );
    }

    if validation.malformed_lines > 0 {
        eprintln!(
            "  {} {} lines did not have the expected field count",
            "Warning:".bright_yellow().bold(),
            validation.malformed_lines
        );
    }
}
