// src/metadata.rs

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// One row of the report: everything extracted from a single image file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub filename: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub preview_bytes: Vec<u8>,
}

impl ImageRecord {
    /// Inline form of the preview, e.g. for HTML or JSON consumers.
    pub fn preview_data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", STANDARD.encode(&self.preview_bytes))
    }
}
