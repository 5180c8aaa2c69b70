//! Command-line argument definitions
//!
//! Three positional paths and nothing else; runtime behaviour is tuned
//! through environment variables (see [`crate::constants`]).

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the contribution processor
///
/// Reads an FEC individual contributions file and writes two reports:
/// running statistics by recipient and zip code, and final statistics by
/// recipient and date.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "political-donors",
    version,
    about = "Running medians of campaign contributions by zip code and by date",
    long_about = "Streams an FEC pipe-delimited individual contributions file and writes two \
                  reports: a running median, count and total per recipient and zip code \
                  (one line per contribution, in input order), and a median, count and total \
                  per recipient and date (sorted, written once at the end). Existing report \
                  files are never overwritten.\n\n\
                  Environment:\n  \
                  POLITICAL_DONORS_MALFORMED_LINES  skip (default) or abort\n  \
                  POLITICAL_DONORS_PROGRESS         true (default) or false\n  \
                  RUST_LOG                          tracing filter, e.g. political_donors=debug"
)]
pub struct Args {
    /// Pipe-delimited FEC contributions file
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Report of running statistics by recipient and zip code
    #[arg(value_name = "ZIP_REPORT")]
    pub zip_output_path: PathBuf,

    /// Report of statistics by recipient and date
    #[arg(value_name = "DATE_REPORT")]
    pub date_output_path: PathBuf,
}
