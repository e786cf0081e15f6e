//! Rendering options and configuration.

use crate::parser::DEFAULT_IMAGE_PREFIX;
use std::path::PathBuf;

/// Options for rendering a Markdown report.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory image links are resolved against
    pub image_dir: PathBuf,

    /// Link prefix that denotes `image_dir` (e.g., "./images/")
    pub image_path_prefix: String,

    /// Layout hint attached to resolved images
    pub full_width_images: bool,

    /// Drop whitespace-only lines in line-oriented sections
    pub skip_blank_lines: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Set the full-width layout hint.
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width_images = full_width;
        self
    }

    /// Keep or drop blank lines in line-oriented sections.
    pub fn with_blank_lines(mut self, keep: bool) -> Self {
        self.skip_blank_lines = !keep;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("images"),
            image_path_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            full_width_images: true,
            skip_blank_lines: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_image_dir("/srv/report/images")
            .with_image_prefix("img/")
            .with_full_width(false)
            .with_blank_lines(true);

        assert_eq!(options.image_dir, PathBuf::from("/srv/report/images"));
        assert_eq!(options.image_path_prefix, "img/");
        assert!(!options.full_width_images);
        assert!(!options.skip_blank_lines);
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.image_path_prefix, "./images/");
        assert!(options.full_width_images);
        assert!(options.skip_blank_lines);
    }
}
