#![allow(dead_code)]

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

pub fn ascii(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

/// Degrees and minutes are whole numbers; seconds are `num / denom`.
pub fn dms(tag: Tag, degrees: u32, minutes: u32, seconds: (u32, u32)) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational { num: degrees, denom: 1 },
            Rational { num: minutes, denom: 1 },
            Rational {
                num: seconds.0,
                denom: seconds.1,
            },
        ]),
    }
}

pub fn orientation(value: u16) -> Field {
    Field {
        tag: Tag::Orientation,
        ifd_num: In::PRIMARY,
        value: Value::Short(vec![value]),
    }
}

/// Little-endian TIFF structure holding `fields`, as stored in both containers.
fn exif_tiff(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("encode exif fixture");
    tiff.into_inner()
}

/// A solid-colour JPEG with the given tags in an APP1 segment right after SOI.
pub fn jpeg_with_exif(width: u32, height: u32, shade: u8, fields: &[Field]) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([shade, 90, 180])));
    let mut jpeg = Cursor::new(Vec::new());
    img.write_to(&mut jpeg, ImageOutputFormat::Jpeg(90))
        .expect("encode jpeg fixture");
    let jpeg = jpeg.into_inner();
    if fields.is_empty() {
        return jpeg;
    }

    let tiff = exif_tiff(fields);
    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("small exif segment");
    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// A solid-colour RGB PNG with the given tags in an `eXIf` chunk before the image data.
pub fn png_with_exif(width: u32, height: u32, shade: u8, fields: &[Field]) -> Vec<u8> {
    let pixels = RgbImage::from_pixel(width, height, Rgb([shade, 40, 220])).into_raw();
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().expect("png header");
    writer
        .write_chunk(png::chunk::ChunkType(*b"eXIf"), &exif_tiff(fields))
        .expect("exif chunk");
    writer.write_image_data(&pixels).expect("png image data");
    writer.finish().expect("png trailer");
    out
}

pub fn write_jpeg(dir: &Path, name: &str, shade: u8, fields: &[Field]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, jpeg_with_exif(64, 48, shade, fields)).expect("write jpeg fixture");
    path
}

pub fn write_png(dir: &Path, name: &str, shade: u8) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(48, 64, Rgb([shade, 200, 20]))
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("write png fixture");
    path
}

pub fn write_png_with_exif(dir: &Path, name: &str, shade: u8, fields: &[Field]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_with_exif(40, 30, shade, fields)).expect("write png fixture");
    path
}

/// Reads one part of a written workbook.
pub fn read_entry(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).expect("open workbook");
    let mut archive = zip::ZipArchive::new(file).expect("workbook is a zip archive");
    let mut contents = String::new();
    archive
        .by_name(name)
        .expect("workbook part present")
        .read_to_string(&mut contents)
        .expect("utf8 workbook part");
    contents
}

pub fn row_count(workbook: &Path) -> usize {
    read_entry(workbook, "xl/worksheets/sheet1.xml")
        .matches("<row ")
        .count()
}
