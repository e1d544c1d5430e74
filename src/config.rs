use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use config::{Config, ConfigError, File};

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "Bilder_Liste.xlsx";
pub const DEFAULT_SHEET_NAME: &str = "Bilder";
pub const DEFAULT_PREVIEW_MAX_SIZE: u32 = 100;
pub const DEFAULT_PREVIEW_QUALITY: u8 = 75;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub allowed_extensions: HashSet<String>,
    pub output_file_name: String,
    pub sheet_name: String,
    pub preview_max_size: u32,
    pub preview_quality: u8,
    pub apply_orientation: bool,
    pub num_workers: usize,
    pub log_level: String,
}

impl AppConfig {
    /// Built-in defaults layered with `config/default.*` when it exists.
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults layered with an explicit file, which must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("allowed_extensions", vec!["jpg", "jpeg", "png"])?
            .set_default("output_file_name", DEFAULT_OUTPUT_FILE_NAME)?
            .set_default("sheet_name", DEFAULT_SHEET_NAME)?
            .set_default("preview_max_size", DEFAULT_PREVIEW_MAX_SIZE as i64)?
            .set_default("preview_quality", DEFAULT_PREVIEW_QUALITY as i64)?
            .set_default("apply_orientation", false)?
            .set_default("num_workers", 1_i64)?
            .set_default("log_level", "info")
    }

    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.contains(&ext.to_lowercase())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: ["jpg", "jpeg", "png"].iter().map(|s| s.to_string()).collect(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            preview_max_size: DEFAULT_PREVIEW_MAX_SIZE,
            preview_quality: DEFAULT_PREVIEW_QUALITY,
            apply_orientation: false,
            num_workers: 1,
            log_level: "info".to_string(),
        }
    }
}
