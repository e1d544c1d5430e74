use crate::config::AppConfig;
use crate::error::AppError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the image files directly inside `source_dir`, in directory enumeration order.
///
/// The order is kept as-is (no sorting) because it becomes the row order of the report.
pub fn list_images(config: &AppConfig, source_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    log::info!("Starting file discovery in {}", source_dir.display());
    log::debug!("Configured allowed extensions: {:?}", config.allowed_extensions);

    if !std::fs::metadata(source_dir)?.is_dir() {
        return Err(AppError::Generic(format!(
            "{} is not a directory",
            source_dir.display()
        )));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {:?}", path);
            continue;
        }

        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if config.is_allowed_extension(ext) => {
                log::debug!("Queued image file: {:?}", path);
                images.push(entry.into_path());
            }
            Some(_) => log::trace!("Skipping file due to unsupported extension: {:?}", path),
            None => log::trace!("Skipping file with no extension: {:?}", path),
        }
    }

    log::info!("File discovery complete: {} image(s) found.", images.len());
    Ok(images)
}
