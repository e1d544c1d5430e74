use image::{DynamicImage, GenericImageView, ImageError, ImageOutputFormat};
use std::io::Cursor;

/// Size and quality of the JPEG previews embedded in the report.
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    pub max_size: u32,
    pub quality: u8,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_size: crate::config::DEFAULT_PREVIEW_MAX_SIZE,
            quality: crate::config::DEFAULT_PREVIEW_QUALITY,
        }
    }
}

/// Shrinks `img` to fit a `max_size` square, keeping the aspect ratio. Never enlarges.
pub fn bound(img: DynamicImage, max_size: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= max_size && height <= max_size {
        return img;
    }
    img.thumbnail(max_size, max_size)
}

/// Rotates/flips according to an EXIF `Orientation` value.
pub fn apply_orientation(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

/// JPEG cannot carry alpha or 16-bit channels, so everything goes through RGB8.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, ImageError> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageOutputFormat::Jpeg(quality))?;
    Ok(buf.into_inner())
}

pub fn make_preview(img: DynamicImage, options: PreviewOptions) -> Result<Vec<u8>, ImageError> {
    let bounded = bound(img, options.max_size);
    encode_jpeg(&bounded, options.quality)
}

/// Decodes an existing preview and produces a fresh bounded buffer from it.
pub fn rederive(bytes: &[u8], options: PreviewOptions) -> Result<Vec<u8>, ImageError> {
    let img = image::load_from_memory(bytes)?;
    make_preview(img, options)
}
