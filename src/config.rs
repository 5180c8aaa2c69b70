//! Configuration management and validation.
//!
//! Provides the record layout used to tokenize input lines, the policy
//! applied to non-conforming lines, and the report paths for a run.
//! Configuration is layered: built-in defaults, then environment
//! variables, then command-line paths.

use crate::constants::{
    ENV_MALFORMED_LINES, ENV_PROGRESS, EXPECTED_FIELD_COUNT, FIELD_DELIMITER,
    ZIP_PREFIX_LEN, fields,
};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// What to do with a line whose field count is not the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Log a warning and continue with the next line
    #[default]
    Skip,
    /// Stop the run with an error
    Abort,
}

impl FromStr for MalformedLinePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(Error::configuration(format!(
                "Unknown malformed line policy '{}' (expected 'skip' or 'abort')",
                other
            ))),
        }
    }
}

impl fmt::Display for MalformedLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// Positional layout of an input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    pub delimiter: char,

    /// Field count of a conforming line
    pub expected_fields: usize,

    pub recipient_id: usize,
    pub zip_code: usize,
    pub transaction_date: usize,
    pub transaction_amount: usize,
    pub other_id: usize,

    /// Leading zip characters kept for grouping
    pub zip_prefix_len: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
            expected_fields: EXPECTED_FIELD_COUNT,
            recipient_id: fields::RECIPIENT_ID,
            zip_code: fields::ZIP_CODE,
            transaction_date: fields::TRANSACTION_DATE,
            transaction_amount: fields::TRANSACTION_AMOUNT,
            other_id: fields::OTHER_ID,
            zip_prefix_len: ZIP_PREFIX_LEN,
        }
    }
}

impl FieldLayout {
    /// Highest field index the validator reads
    pub fn max_index(&self) -> usize {
        [
            self.recipient_id,
            self.zip_code,
            self.transaction_date,
            self.transaction_amount,
            self.other_id,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Runtime processing behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingConfig {
    pub malformed_lines: MalformedLinePolicy,

    /// Show a progress spinner on stderr (hidden anyway when not a terminal)
    pub show_progress: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            malformed_lines: MalformedLinePolicy::Skip,
            show_progress: true,
        }
    }
}

/// Input and report locations for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportPaths {
    pub input: PathBuf,
    pub zip_output: PathBuf,
    pub date_output: PathBuf,
}

/// Complete configuration for a processing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub paths: ReportPaths,
    pub layout: FieldLayout,
    pub processing: ProcessingConfig,
}

impl Config {
    /// Create a configuration with default layout and processing settings
    pub fn new(input: PathBuf, zip_output: PathBuf, date_output: PathBuf) -> Self {
        Self {
            paths: ReportPaths {
                input,
                zip_output,
                date_output,
            },
            ..Default::default()
        }
    }

    /// Load configuration: defaults, then process environment, then paths
    pub fn load_layered(input: PathBuf, zip_output: PathBuf, date_output: PathBuf) -> Result<Self> {
        let mut config = Self::new(input, zip_output, date_output);
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        debug!("Loaded configuration: {}", config.to_json()?);
        Ok(config)
    }

    /// Effective configuration as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize configuration: {}", e)))
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MALFORMED_LINES) {
            self.processing.malformed_lines = value.parse()?;
        }

        if let Some(value) = lookup(ENV_PROGRESS) {
            self.processing.show_progress = parse_bool(ENV_PROGRESS, &value)?;
        }

        Ok(())
    }

    /// Builder: set the malformed line policy
    pub fn with_malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.processing.malformed_lines = policy;
        self
    }

    /// Builder: enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.processing.show_progress = show_progress;
        self
    }

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;

        if layout.max_index() >= layout.expected_fields {
            return Err(Error::configuration(format!(
                "Field index {} is outside a {}-field record",
                layout.max_index(),
                layout.expected_fields
            )));
        }

        if layout.zip_prefix_len == 0 {
            return Err(Error::configuration(
                "Zip prefix length must be greater than 0",
            ));
        }

        if self.paths.zip_output == self.paths.date_output {
            return Err(Error::configuration(format!(
                "Zip and date reports cannot share a path: {}",
                self.paths.zip_output.display()
            )));
        }

        if self.paths.input == self.paths.zip_output || self.paths.input == self.paths.date_output
        {
            return Err(Error::configuration(format!(
                "Report path cannot be the input file: {}",
                self.paths.input.display()
            )));
        }

        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "Invalid boolean '{}' for {}",
            other, key
        ))),
    }
}
