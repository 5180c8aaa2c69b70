//! Integration tests for the processor module
//!
//! Runs the full pipeline against small FEC-shaped inputs in temp dirs.


pub use crate::app::services::record_validator::tests::fec_line;

use crate::config::Config;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `lines` as an input file and return a config pointing at it
pub fn create_test_run(temp_dir: &TempDir, lines: &[String]) -> Config {
    let input = temp_dir.path().join("itcont.txt");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&input, content).unwrap();

    Config::new(
        input,
        temp_dir.path().join("medianvals_by_zip.txt"),
        temp_dir.path().join("medianvals_by_date.txt"),
    )
    .with_progress(false)
}

pub fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
