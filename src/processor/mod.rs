//! Main processing engine.
//!
//! Drives a single pass over the input: each line is validated, folded
//! into the zip and date aggregators, and the zip line written out before
//! the next line is read. The date report is produced once the input is
//! exhausted.

pub mod stats;

#[cfg(test)]
pub mod tests;

pub use stats::ProcessingStats;

use crate::app::models::{Contribution, LineOutcome};
use crate::app::services::aggregator::{DateAggregator, ZipAggregator};
use crate::app::services::record_validator::RecordValidator;
use crate::app::services::report_writer::ReportWriter;
use crate::config::{Config, MalformedLinePolicy};
use crate::constants::PROGRESS_TICK_INTERVAL;
use crate::{Error, Result};

use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Owns the validator, both aggregation tables and the run configuration
#[derive(Debug)]
pub struct ContributionProcessor {
    config: Config,
    validator: RecordValidator,
    by_zip: ZipAggregator,
    by_date: DateAggregator,
    lossy_reported_lines: usize,
}

impl ContributionProcessor {
    /// Create a processor for the given configuration
    pub fn new(config: Config) -> Self {
        let validator = RecordValidator::new(config.layout.clone());
        Self {
            config,
            validator,
            by_zip: ZipAggregator::new(),
            by_date: DateAggregator::new(),
            lossy_reported_lines: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run against the configured input and report paths
    ///
    /// Pre-run checks happen before anything is written: the configuration
    /// must be consistent, the input must be an existing file and neither
    /// report may already exist.
    pub fn run(self) -> Result<ProcessingStats> {
        self.config.validate()?;
        let paths = &self.config.paths;

        if !paths.input.is_file() {
            return Err(Error::input_not_found(&paths.input));
        }

        let input = File::open(&paths.input).map_err(|e| {
            Error::io(
                format!("Failed to open input '{}'", paths.input.display()),
                e,
            )
        })?;
        let writer = ReportWriter::create(&paths.zip_output, &paths.date_output)?;

        info!(
            "Processing {} -> {}, {}",
            paths.input.display(),
            paths.zip_output.display(),
            paths.date_output.display()
        );

        self.process_reader(BufReader::new(input), writer)
    }

    /// Process every line of `reader`, writing reports through `writer`
    pub fn process_reader<R: BufRead>(
        mut self,
        mut reader: R,
        mut writer: ReportWriter,
    ) -> Result<ProcessingStats> {
        // Field indices are used unchecked per line
        self.config.validate()?;

        let start_time = Instant::now();
        let progress = self.create_progress();

        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            let read = reader.read_until(b'\n', &mut buffer).map_err(|e| {
                Error::io(format!("Failed to read input line {}", line_number + 1), e)
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = decode_line(line_number, &buffer);
            let lossy = matches!(line, Cow::Owned(_));
            self.process_line(line_number, &line, lossy, &mut writer)?;

            if line_number % PROGRESS_TICK_INTERVAL == 0 {
                progress.set_message(format!("{} lines", line_number));
                progress.tick();
            }
        }

        progress.finish_and_clear();
        debug!("Input exhausted after {} lines", line_number);

        let zip_groups = self.by_zip.len();
        let date_groups = self.by_date.len();
        let zip_lines_written = writer.zip_lines();

        let date_report = self.by_date.finalize();
        let date_lines_written = writer.finish(&date_report)?;

        let stats = ProcessingStats {
            validation: self.validator.stats().clone(),
            zip_lines_written,
            date_lines_written,
            zip_groups,
            date_groups,
            lossy_reported_lines: self.lossy_reported_lines,
            processing_time: start_time.elapsed(),
        };

        info!("{}", stats.summary());
        Ok(stats)
    }

    /// Validate, aggregate and emit a single line
    fn process_line(
        &mut self,
        line_number: usize,
        line: &str,
        lossy: bool,
        writer: &mut ReportWriter,
    ) -> Result<()> {
        match self.validator.validate_line(line_number, line) {
            LineOutcome::Accepted(contribution) => {
                if lossy && has_replacement(&contribution) {
                    warn!(
                        "Line {} has invalid UTF-8 in a reported field; written as U+FFFD",
                        line_number
                    );
                    self.lossy_reported_lines += 1;
                }
                self.aggregate(&contribution, writer)
            }
            LineOutcome::Ineligible(_) => Ok(()),
            LineOutcome::Malformed { found } => {
                let expected = self.config.layout.expected_fields;
                match self.config.processing.malformed_lines {
                    MalformedLinePolicy::Skip => {
                        warn!(
                            "Skipping line {}: expected {} fields, found {}",
                            line_number, expected, found
                        );
                        Ok(())
                    }
                    MalformedLinePolicy::Abort => {
                        Err(Error::malformed_line(line_number, expected, found))
                    }
                }
            }
        }
    }

    fn aggregate(&mut self, contribution: &Contribution, writer: &mut ReportWriter) -> Result<()> {
        if let Some(zip_prefix) = &contribution.zip_prefix {
            let line =
                self.by_zip
                    .update(&contribution.recipient_id, zip_prefix, contribution.amount)?;
            writer.write_zip_line(&line)?;
        }

        if let Some(date) = contribution.date {
            self.by_date
                .update(&contribution.recipient_id, date, contribution.amount)?;
        }

        Ok(())
    }

    fn create_progress(&self) -> ProgressBar {
        if !self.config.processing.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            progress.set_style(style);
        }
        progress.enable_steady_tick(Duration::from_millis(120));
        progress.set_message("reading contributions");
        progress
    }
}

/// True when a field that ends up in a report carries a replacement character
fn has_replacement(contribution: &Contribution) -> bool {
    let replaced = |field: &str| field.contains(char::REPLACEMENT_CHARACTER);
    replaced(contribution.recipient_id.as_str())
        || contribution.zip_prefix.as_deref().is_some_and(replaced)
}

/// Decode a raw input line, replacing invalid UTF-8
fn decode_line(line_number: usize, bytes: &[u8]) -> Cow<'_, str> {
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        debug!("Line {} is not valid UTF-8; decoded lossily", line_number);
    }
    line
}
