//! Collects capture date/time, GPS position and a small preview of every
//! image in a folder into one spreadsheet.

pub mod config;
pub mod error;
pub mod exif_data;
pub mod metadata;
pub mod preview;
pub mod processor;
pub mod report;
pub mod selector;
pub mod selectors;
pub mod walker;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::processor::FileFailure;
use crate::report::ReportOptions;
use std::path::{Path, PathBuf};

pub use crate::metadata::ImageRecord;

#[derive(Debug)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub failures: Vec<FileFailure>,
}

/// Scans `source_dir`, extracts every image and writes the report into `output_dir`.
pub fn run(
    config: &AppConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<RunSummary, AppError> {
    let paths = walker::list_images(config, source_dir)?;
    let outcome = processor::process_all(config, &paths)?;

    let output_path = output_dir.join(&config.output_file_name);
    let options = ReportOptions {
        sheet_name: config.sheet_name.clone(),
        preview: processor::ExtractOptions::from(config).preview,
    };
    report::build_with(&outcome.records, &output_path, &options)?;

    Ok(RunSummary {
        output_path,
        rows: outcome.records.len(),
        failures: outcome.failures,
    })
}
