use rust_xlsxwriter::XlsxError;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong while producing the report file.
#[derive(Error, Debug)]
pub enum WriteCause {
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    #[error("preview could not be re-encoded: {0}")]
    Preview(#[from] image::ImageError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The file could not be opened or decoded as an image.
    #[error("Could not decode {filename}: {source}")]
    Decode {
        filename: String,
        #[source]
        source: image::ImageError,
    },

    /// The report could not be created or written.
    #[error("Could not write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteCause,
    },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl AppError {
    pub fn decode(filename: impl Into<String>, source: image::ImageError) -> Self {
        AppError::Decode {
            filename: filename.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: impl Into<WriteCause>) -> Self {
        AppError::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Per-file errors are recovered by the batch driver; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Decode { .. })
    }
}
