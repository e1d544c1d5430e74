use crate::config::AppConfig;
use crate::error::AppError;
use crate::exif_data::{read_exif, summarize, ExifSummary};
use crate::metadata::ImageRecord;
use crate::preview::{apply_orientation, make_preview, PreviewOptions};
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageError};
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub preview: PreviewOptions,
    pub apply_orientation: bool,
}

impl From<&AppConfig> for ExtractOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            preview: PreviewOptions {
                max_size: config.preview_max_size,
                quality: config.preview_quality,
            },
            apply_orientation: config.apply_orientation,
        }
    }
}

/// A file that was left out of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub filename: String,
    pub reason: String,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing file {}: {}", self.filename, self.reason)
    }
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<ImageRecord>,
    pub failures: Vec<FileFailure>,
}

/// Builds the record for one image file.
///
/// Only an undecodable image is an error; missing or broken tag data just
/// leaves the optional fields empty.
pub fn extract(path: &Path, options: &ExtractOptions) -> Result<ImageRecord, AppError> {
    let filename = file_name_of(path);

    log::trace!("Decoding image: {:?}", path);
    let img = decode(path).map_err(|e| AppError::decode(&filename, e))?;

    log::trace!("Extracting EXIF data for image: {:?}", path);
    let summary = read_exif(path).map(|exif| summarize(&exif)).unwrap_or_default();
    log::debug!("EXIF summary for {:?}: {:?}", path, summary);

    let img = match (options.apply_orientation, summary.orientation) {
        (true, Some(orientation)) => apply_orientation(img, orientation),
        _ => img,
    };

    let preview_bytes =
        make_preview(img, options.preview).map_err(|e| AppError::decode(&filename, e))?;

    let ExifSummary {
        date,
        time,
        latitude,
        longitude,
        ..
    } = summary;

    Ok(ImageRecord {
        filename,
        date,
        time,
        latitude,
        longitude,
        preview_bytes,
    })
}

/// Extracts every file in order. Undecodable files are logged, collected as
/// failures and skipped; they never abort the batch.
pub fn process_all(config: &AppConfig, paths: &[PathBuf]) -> Result<BatchOutcome, AppError> {
    let options = ExtractOptions::from(config);
    log::info!(
        "Starting image processing of {} file(s) with {} worker(s)",
        paths.len(),
        config.num_workers.max(1)
    );

    // Indexed collection keeps the enumeration order in both modes.
    let results: Vec<Result<ImageRecord, AppError>> = if config.num_workers > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_workers)
            .build()?;
        pool.install(|| paths.par_iter().map(|path| extract(path, &options)).collect())
    } else {
        paths.iter().map(|path| extract(path, &options)).collect()
    };

    let mut outcome = BatchOutcome::default();
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(record) => {
                log::debug!("Processed {:?}", path);
                outcome.records.push(record);
            }
            Err(e) if e.is_recoverable() => {
                let failure = FileFailure {
                    filename: file_name_of(path),
                    reason: failure_reason(&e),
                };
                log::warn!("{}", failure);
                outcome.failures.push(failure);
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "All images processed: {} ok, {} skipped.",
        outcome.records.len(),
        outcome.failures.len()
    );
    Ok(outcome)
}

fn decode(path: &Path) -> Result<DynamicImage, ImageError> {
    // Sniff the content so a mislabelled extension still decodes.
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn failure_reason(error: &AppError) -> String {
    match error {
        AppError::Decode { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32, shade: u8) {
        RgbImage::from_pixel(width, height, Rgb([shade, 100, 150]))
            .save_with_format(path, image::ImageFormat::Png)
            .expect("write png fixture");
    }

    #[test]
    fn plain_image_yields_record_without_metadata() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("plain.png");
        write_png(&path, 250, 125, 10);

        let record = extract(&path, &ExtractOptions::default())?;
        assert_eq!(record.filename, "plain.png");
        assert!(record.date.is_none() && record.time.is_none());
        assert!(record.latitude.is_none() && record.longitude.is_none());
        let preview = image::load_from_memory(&record.preview_bytes)?;
        assert_eq!(preview.dimensions(), (100, 50));
        Ok(())
    }

    #[test]
    fn mislabelled_extension_still_decodes() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("actually_png.jpg");
        write_png(&path, 20, 20, 30);

        let record = extract(&path, &ExtractOptions::default())?;
        assert_eq!(record.filename, "actually_png.jpg");
        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_decode_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("corrupt.jpg");
        std::fs::write(&path, b"\xFF\xD8\xFFnot really a jpeg")?;

        match extract(&path, &ExtractOptions::default()) {
            Err(AppError::Decode { filename, .. }) => assert_eq!(filename, "corrupt.jpg"),
            other => panic!("expected decode error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn corrupt_file_is_skipped_and_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let good1 = dir.path().join("good1.png");
        let corrupt = dir.path().join("corrupt.jpg");
        let good2 = dir.path().join("good2.png");
        write_png(&good1, 8, 8, 1);
        std::fs::write(&corrupt, b"garbage")?;
        write_png(&good2, 8, 8, 2);

        let outcome = process_all(&AppConfig::default(), &[good1, corrupt, good2])?;
        let names: Vec<&str> = outcome.records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, ["good1.png", "good2.png"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].filename, "corrupt.jpg");
        assert!(outcome.failures[0].to_string().contains("corrupt.jpg"));
        Ok(())
    }

    #[test]
    fn parallel_extraction_keeps_input_order() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let names = ["c.png", "a.png", "b.png", "e.png", "d.png"];
        let paths: Vec<PathBuf> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let path = dir.path().join(name);
                write_png(&path, 30 + i as u32, 30, i as u8);
                path
            })
            .collect();

        let config = AppConfig {
            num_workers: 3,
            ..AppConfig::default()
        };
        let outcome = process_all(&config, &paths)?;
        let got: Vec<&str> = outcome.records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(got, names);
        assert!(outcome.failures.is_empty());
        Ok(())
    }
}
