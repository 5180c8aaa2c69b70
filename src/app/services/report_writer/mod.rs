//! Report writer for the zip and date outputs
//!
//! Zip lines are appended through a handle held open for the run; the
//! date report is written once, complete and sorted, at the end.

pub mod writer;

pub use writer::{ReportWriter, ensure_absent};
