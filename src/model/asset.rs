//! Image assets read from the image directory.

use crate::detect::{self, ImageFormat};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A chart image loaded from disk.
///
/// Assets are never cached: every call to [`Asset::load`] reads the file
/// again, so a chart regenerated on disk shows up on the next render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Resolved absolute (or base-relative) path
    pub path: PathBuf,

    /// Raw image bytes
    #[serde(skip_serializing, default)]
    pub data: Vec<u8>,

    /// Detected format
    pub format: ImageFormat,

    /// Width and height in pixels, when the header carries them
    pub dimensions: Option<(u32, u32)>,
}

impl Asset {
    /// Load an image from a resolved path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::AssetNotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        let format = detect::detect_image_format_from_bytes(&data)?;
        let dimensions = match format {
            ImageFormat::Png => detect::png_dimensions(&data),
            _ => None,
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
            format,
            dimensions,
        })
    }

    /// Size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// MIME type of the image.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// File name component of the path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Human-readable size, e.g. `12.4 KB`.
    pub fn display_size(&self) -> String {
        let bytes = self.size() as f64;
        if bytes >= 1024.0 * 1024.0 {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        } else if bytes >= 1024.0 {
            format!("{:.1} KB", bytes / 1024.0)
        } else {
            format!("{} B", self.size())
        }
    }
}
