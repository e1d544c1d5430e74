//! Date/time and GPS extraction from the primary EXIF directory.
//!
//! Only the handful of tags the report needs are looked at. Missing or
//! malformed tags never fail: they leave the matching fields unset.

use exif::{Exif, Field, In, Rational, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The report-relevant subset of an image's tag data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExifSummary {
    pub date: Option<String>,
    pub time: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub orientation: Option<u32>,
}

/// GPS sub-tags gathered while scanning the tag set.
#[derive(Debug, Default)]
struct GpsInfo {
    latitude: Option<Vec<Rational>>,
    latitude_ref: Option<String>,
    longitude: Option<Vec<Rational>>,
    longitude_ref: Option<String>,
}

impl GpsInfo {
    /// Signed decimal degrees, only when both triplets are usable.
    fn resolve(&self) -> Option<(f64, f64)> {
        let mut lat = dms_to_decimal(self.latitude.as_deref()?)?;
        let mut lon = dms_to_decimal(self.longitude.as_deref()?)?;
        if self.latitude_ref.as_deref() == Some("S") {
            lat = -lat;
        }
        if self.longitude_ref.as_deref() == Some("W") {
            lon = -lon;
        }
        Some((lat, lon))
    }
}

/// Reads tag data from a JPEG/PNG/TIFF container. `None` when the file has none.
pub fn read_exif(path: &Path) -> Option<Exif> {
    let file = File::open(path).ok()?;
    let mut buf_reader = BufReader::new(file);
    match Reader::new().read_from_container(&mut buf_reader) {
        Ok(exif) => Some(exif),
        Err(e) => {
            log::debug!("No EXIF data in {:?}: {}", path, e);
            None
        }
    }
}

/// Scans the primary tag set once and collects date, time, GPS and orientation.
pub fn summarize(exif: &Exif) -> ExifSummary {
    let mut summary = ExifSummary::default();
    let mut gps = GpsInfo::default();

    for field in exif.fields().filter(|f| f.ifd_num == In::PRIMARY) {
        match field.tag {
            Tag::DateTime => {
                if let Some((date, time)) =
                    field_as_string(field).as_deref().and_then(split_date_time)
                {
                    summary.date = Some(date);
                    summary.time = Some(time);
                }
            }
            Tag::GPSLatitude => gps.latitude = field_as_rational_vec(field),
            Tag::GPSLatitudeRef => gps.latitude_ref = field_as_string(field),
            Tag::GPSLongitude => gps.longitude = field_as_rational_vec(field),
            Tag::GPSLongitudeRef => gps.longitude_ref = field_as_string(field),
            Tag::Orientation => summary.orientation = field.value.get_uint(0),
            _ => {}
        }
    }

    if let Some((lat, lon)) = gps.resolve() {
        summary.latitude = Some(format_degrees(lat));
        summary.longitude = Some(format_degrees(lon));
    }

    summary
}

/// Splits `"YYYY:MM:DD HH:MM:SS"` into its two whitespace-separated tokens.
pub fn split_date_time(value: &str) -> Option<(String, String)> {
    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(date), Some(time), None) => Some((date.to_string(), time.to_string())),
        _ => None,
    }
}

/// `degrees + minutes/60 + seconds/3600`; requires exactly three finite components.
pub fn dms_to_decimal(dms: &[Rational]) -> Option<f64> {
    let [d, m, s] = dms else {
        return None;
    };
    let decimal = d.to_f64() + m.to_f64() / 60.0 + s.to_f64() / 3600.0;
    decimal.is_finite().then_some(decimal)
}

pub fn format_degrees(value: f64) -> String {
    format!("{:.6}°", value)
}

fn field_as_string(field: &Field) -> Option<String> {
    match &field.value {
        Value::Ascii(vecs) => vecs
            .first()
            .map(|v| String::from_utf8_lossy(v).trim().to_string()),
        _ => None,
    }
}

fn field_as_rational_vec(field: &Field) -> Option<Vec<Rational>> {
    match &field.value {
        Value::Rational(v) => Some(v.clone()),
        _ => None,
    }
}
