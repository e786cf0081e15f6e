//! Image format detection for dashboard assets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raster formats the dashboard knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG / JFIF
    Jpeg,
    /// GIF87a / GIF89a
    Gif,
    /// RIFF WebP
    Webp,
}

impl ImageFormat {
    /// MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Webp => "image/webp",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Webp => "WebP",
        };
        f.write_str(name)
    }
}

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff";
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";

/// Bytes needed to read the PNG IHDR width and height.
const PNG_HEADER_LEN: usize = 24;

/// Detect the image format of a file by reading its first bytes.
///
/// # Example
/// ```no_run
/// use reportdeck::detect::detect_image_format_from_path;
///
/// let format = detect_image_format_from_path("images/price_distribution_v2.png").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_image_format_from_path<P: AsRef<Path>>(path: P) -> Result<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = Vec::with_capacity(16);
    file.by_ref().take(16).read_to_end(&mut header)?;
    detect_image_format_from_bytes(&header)
}

/// Detect the image format from leading bytes.
///
/// # Returns
/// * `Ok(ImageFormat)` when the magic bytes match a known format
/// * `Err(Error::UnknownImageFormat)` otherwise
pub fn detect_image_format_from_bytes(data: &[u8]) -> Result<ImageFormat> {
    if data.starts_with(PNG_MAGIC) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(JPEG_MAGIC) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(GIF87_MAGIC) || data.starts_with(GIF89_MAGIC) {
        return Ok(ImageFormat::Gif);
    }
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return Ok(ImageFormat::Webp);
    }
    Err(Error::UnknownImageFormat)
}

/// Read width and height from a PNG IHDR chunk.
///
/// Returns `None` for anything that is not a PNG or is truncated.
pub fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < PNG_HEADER_LEN || !data.starts_with(PNG_MAGIC) {
        return None;
    }
    if &data[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Some((width, height))
}

/// Check if bytes look like a supported image.
pub fn is_image_bytes(data: &[u8]) -> bool {
    detect_image_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_header(width: u32, height: u32) -> Vec<u8> {
        let mut data = PNG_MAGIC.to_vec();
        data.extend_from_slice(&13u32.to_be_bytes());
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data
    }

    #[test]
    fn test_detect_png() {
        let data = png_header(640, 480);
        assert_eq!(detect_image_format_from_bytes(&data).unwrap(), ImageFormat::Png);
        assert_eq!(png_dimensions(&data), Some((640, 480)));
    }

    #[test]
    fn test_detect_other_formats() {
        assert_eq!(
            detect_image_format_from_bytes(b"\xff\xd8\xff\xe0\x00\x10JFIF").unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            detect_image_format_from_bytes(b"GIF89a\x01\x00").unwrap(),
            ImageFormat::Gif
        );
        assert_eq!(
            detect_image_format_from_bytes(b"RIFF\x00\x00\x00\x00WEBPVP8 ").unwrap(),
            ImageFormat::Webp
        );
    }

    #[test]
    fn test_detect_unknown() {
        let result = detect_image_format_from_bytes(b"<svg xmlns=");
        assert!(matches!(result, Err(Error::UnknownImageFormat)));
        assert!(!is_image_bytes(b""));
    }

    #[test]
    fn test_png_dimensions_truncated() {
        let data = png_header(10, 10);
        assert_eq!(png_dimensions(&data[..20]), None);
        assert_eq!(png_dimensions(b"GIF89a"), None);
    }

    #[test]
    fn test_mime_and_extension() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert_eq!(ImageFormat::Webp.to_string(), "WebP");
    }
}
