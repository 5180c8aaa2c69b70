//! Report file handling

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{Error, Result};

/// Fail if a report path already exists
///
/// Reports are never silently overwritten.
pub fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::output_exists(path));
    }
    Ok(())
}

/// Owns both report destinations for one run
///
/// The zip report is opened up front and held for the whole run; lines are
/// appended as they are produced. The date report is written in one go by
/// [`finish`](Self::finish). Dropping the writer early (on an error path)
/// still flushes and closes the zip report.
#[derive(Debug)]
pub struct ReportWriter {
    zip_report: BufWriter<File>,
    zip_path: PathBuf,
    date_path: PathBuf,
    zip_lines: usize,
}

impl ReportWriter {
    /// Open the zip report, refusing to replace an existing file
    pub fn create(zip_path: &Path, date_path: &Path) -> Result<Self> {
        ensure_absent(date_path)?;

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(zip_path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => Error::output_exists(zip_path),
                _ => Error::io(
                    format!("Failed to create zip report '{}'", zip_path.display()),
                    e,
                ),
            })?;

        debug!("Opened zip report {}", zip_path.display());

        Ok(Self {
            zip_report: BufWriter::new(file),
            zip_path: zip_path.to_path_buf(),
            date_path: date_path.to_path_buf(),
            zip_lines: 0,
        })
    }

    /// Append one line to the zip report
    pub fn write_zip_line(&mut self, line: &str) -> Result<()> {
        self.zip_report.write_all(line.as_bytes()).map_err(|e| {
            Error::io(
                format!("Failed to write zip report '{}'", self.zip_path.display()),
                e,
            )
        })?;
        self.zip_lines += 1;
        Ok(())
    }

    /// Lines appended to the zip report so far
    pub fn zip_lines(&self) -> usize {
        self.zip_lines
    }

    /// Flush the zip report and write the complete date report
    ///
    /// Returns the number of date report lines written.
    pub fn finish(mut self, date_lines: &[String]) -> Result<usize> {
        self.zip_report.flush().map_err(|e| {
            Error::io(
                format!("Failed to flush zip report '{}'", self.zip_path.display()),
                e,
            )
        })?;

        write_report(&self.date_path, date_lines)?;

        info!(
            "Wrote {} zip lines to {} and {} date lines to {}",
            self.zip_lines,
            self.zip_path.display(),
            date_lines.len(),
            self.date_path.display()
        );

        Ok(date_lines.len())
    }
}

/// Write a complete report, replacing any previous content
fn write_report(path: &Path, lines: &[String]) -> Result<()> {
    let context = |e: std::io::Error| {
        Error::io(format!("Failed to write report '{}'", path.display()), e)
    };

    let mut writer = BufWriter::new(File::create(path).map_err(context)?);
    for line in lines {
        writer.write_all(line.as_bytes()).map_err(context)?;
    }
    writer.flush().map_err(context)?;

    Ok(())
}
