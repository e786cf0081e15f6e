//! Per-session dashboard configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_PREVIEW_ROWS;
use crate::error::Error;
use crate::parser::DEFAULT_IMAGE_PREFIX;
use crate::render::{AssetResolver, RenderOptions};

/// Integrated analysis report, rendered with its embedded charts.
pub const INTEGRATED_REPORT: &str = "integrated_analysis_report.md";
/// Customer journey report.
pub const JOURNEY_REPORT: &str = "customer_journey_report.md";
/// Reorder / retention report.
pub const REORDER_REPORT: &str = "reorder_analysis_report.md";
/// Transaction table under `<root>/data`.
pub const DATA_FILE: &str = "transaction_level_table.csv";

/// Which dashboard to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Report viewer with journey, retention, raw data and insights
    #[default]
    Integrated,
    /// Overview, category, price and product-attribute pages
    Overview,
}

impl Variant {
    /// All variants.
    pub const ALL: [Variant; 2] = [Variant::Integrated, Variant::Overview];

    /// Stable key used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Variant::Integrated => "integrated",
            Variant::Overview => "overview",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integrated" => Ok(Variant::Integrated),
            "overview" | "final" => Ok(Variant::Overview),
            other => Err(Error::Other(format!("Unknown dashboard variant: {}", other))),
        }
    }
}

/// Immutable locations and settings for one dashboard session.
///
/// Every view receives this by reference; nothing in it changes while the
/// session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Directory holding `report/`, `images/` and `data/`
    pub root: PathBuf,

    /// Directory holding the Markdown reports
    pub report_dir: PathBuf,

    /// Directory image links resolve against
    pub image_dir: PathBuf,

    /// CSV shown by the data view
    pub data_path: PathBuf,

    /// Dashboard variant
    pub variant: Variant,

    /// Rows shown in the data preview
    pub preview_rows: usize,
}

impl DashboardConfig {
    /// Configuration using the conventional layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            report_dir: root.join("report"),
            image_dir: root.join("images"),
            data_path: root.join("data").join(DATA_FILE),
            root,
            variant: Variant::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    /// Set the report directory.
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = dir.into();
        self
    }

    /// Set the image directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Set the data file.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the preview row cap.
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Path of a report file in the report directory.
    pub fn report_path(&self, file_name: &str) -> PathBuf {
        self.report_dir.join(file_name)
    }

    /// Render options for reports in this session.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_image_dir(&self.image_dir)
            .with_image_prefix(DEFAULT_IMAGE_PREFIX)
    }

    /// Resolver for image paths relative to the image directory.
    pub fn resolver(&self) -> AssetResolver<'_> {
        AssetResolver::new(&self.image_dir, DEFAULT_IMAGE_PREFIX)
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_layout() {
        let config = DashboardConfig::new("/srv/olist");

        assert_eq!(config.report_dir, PathBuf::from("/srv/olist/report"));
        assert_eq!(config.image_dir, PathBuf::from("/srv/olist/images"));
        assert_eq!(
            config.data_path,
            PathBuf::from("/srv/olist/data/transaction_level_table.csv")
        );
        assert_eq!(
            config.report_path(JOURNEY_REPORT),
            PathBuf::from("/srv/olist/report/customer_journey_report.md")
        );
        assert_eq!(config.preview_rows, 100);
    }

    #[test]
    fn test_builder_overrides() {
        let config = DashboardConfig::new("/srv")
            .with_data_path("/data/t.csv")
            .with_image_dir("/assets")
            .with_variant(Variant::Overview)
            .with_preview_rows(5);

        assert_eq!(config.data_path, PathBuf::from("/data/t.csv"));
        assert_eq!(config.render_options().image_dir, PathBuf::from("/assets"));
        assert_eq!(config.variant, Variant::Overview);
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Integrated".parse::<Variant>().unwrap(), Variant::Integrated);
        assert_eq!("final".parse::<Variant>().unwrap(), Variant::Overview);
        assert!("other".parse::<Variant>().is_err());
        assert_eq!(Variant::Overview.to_string(), "overview");
    }
}
