//! Spreadsheet report: one header row, then one row per image with the
//! preview anchored in column A.

use crate::config::DEFAULT_SHEET_NAME;
use crate::error::AppError;
use crate::metadata::ImageRecord;
use crate::preview::{self, PreviewOptions};
use rust_xlsxwriter::{Format, FormatAlign, Image, Workbook, Worksheet, XlsxError};
use std::path::Path;

pub const HEADERS: [&str; 6] = ["Preview", "Name", "Date", "Time", "Latitude", "Longitude"];

const PREVIEW_COLUMN_WIDTH: f64 = 14.3;
const DATA_COLUMN_WIDTH: f64 = 18.0;
const NAME_COLUMN_WIDTH: f64 = 28.0;
// 100 px at the default 96 dpi.
const PREVIEW_ROW_HEIGHT: f64 = 75.0;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub sheet_name: String,
    pub preview: PreviewOptions,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            preview: PreviewOptions::default(),
        }
    }
}

/// Writes `records` to `output_path` with the default layout, replacing any existing file.
pub fn build(records: &[ImageRecord], output_path: &Path) -> Result<(), AppError> {
    build_with(records, output_path, &ReportOptions::default())
}

pub fn build_with(
    records: &[ImageRecord],
    output_path: &Path,
    options: &ReportOptions,
) -> Result<(), AppError> {
    log::info!(
        "Building report with {} row(s) at {}",
        records.len(),
        output_path.display()
    );
    let write_err = |e: XlsxError| AppError::write(output_path, e);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name).map_err(write_err)?;
    set_column_widths(worksheet).map_err(write_err)?;

    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
    for (col, title) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(write_err)?;
    }

    let cell_format = Format::new().set_align(FormatAlign::VerticalCenter);
    for (index, record) in records.iter().enumerate() {
        // Sheet row i + 2 in spreadsheet terms; zero-based here.
        let row = (index + 1) as u32;
        log::trace!("Writing row {} for {}", row + 1, record.filename);

        let bytes = preview::rederive(&record.preview_bytes, options.preview)
            .map_err(|e| AppError::write(output_path, e))?;
        let image = Image::new_from_buffer(&bytes).map_err(write_err)?;
        worksheet.set_row_height(row, PREVIEW_ROW_HEIGHT).map_err(write_err)?;
        worksheet.insert_image(row, 0, &image).map_err(write_err)?;

        let cells = [
            Some(record.filename.as_str()),
            record.date.as_deref(),
            record.time.as_deref(),
            record.latitude.as_deref(),
            record.longitude.as_deref(),
        ];
        for (offset, value) in cells.iter().enumerate() {
            if let Some(value) = value {
                worksheet
                    .write_string_with_format(row, (offset + 1) as u16, *value, &cell_format)
                    .map_err(write_err)?;
            }
        }
    }

    workbook.save(output_path).map_err(write_err)?;
    log::info!("Report saved to {}", output_path.display());
    Ok(())
}

fn set_column_widths(worksheet: &mut Worksheet) -> Result<(), XlsxError> {
    worksheet.set_column_width(0, PREVIEW_COLUMN_WIDTH)?;
    worksheet.set_column_width(1, NAME_COLUMN_WIDTH)?;
    for col in 2..HEADERS.len() as u16 {
        worksheet.set_column_width(col, DATA_COLUMN_WIDTH)?;
    }
    Ok(())
}
