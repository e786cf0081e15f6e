//! # reportdeck
//!
//! Read-only analytics dashboard built around a Markdown report renderer.
//!
//! Reports are plain Markdown files whose image links point into an image
//! directory. The renderer turns a report into an ordered list of
//! [`RenderInstruction`]s: text blocks, resolved images, and warnings in
//! place of images that cannot be found. Dashboard views wrap the renderer
//! with CSV previews, metric widgets and summary tables.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reportdeck::{render_report, RenderOptions};
//!
//! fn main() -> reportdeck::Result<()> {
//!     let options = RenderOptions::new().with_image_dir("./images");
//!     let instructions = render_report("report/integrated_analysis_report.md", &options)?;
//!
//!     println!("{}", reportdeck::render::to_markdown(&instructions)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Report rendering**: section splitting with inline image resolution
//! - **Safe asset paths**: links cannot escape the image directory
//! - **Data preview**: capped CSV preview plus a full download payload
//! - **Dashboard views**: two menu variants of fixed analysis pages
//! - **Exporters**: Markdown, plain text and JSON

pub mod config;
pub mod dashboard;
pub mod data;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use config::{DashboardConfig, Variant};
pub use dashboard::{Menu, View};
pub use detect::{detect_image_format_from_bytes, detect_image_format_from_path, ImageFormat};
pub use error::{Error, Result};
pub use model::{Asset, DataTable, Document, Download, Metric, Sidebar};
pub use render::{
    JsonFormat, Presenter, RenderInstruction, RenderOptions, RenderResult, ReportRenderer, Tone,
    WarningKind,
};

use std::path::Path;

/// Render a report file.
///
/// Unlike [`render::render_report_file`], a missing file is returned as
/// [`Error::ReportNotFound`] instead of an `Error` instruction.
///
/// # Example
///
/// ```no_run
/// use reportdeck::{render_report, RenderOptions};
///
/// let instructions = render_report("report.md", &RenderOptions::default()).unwrap();
/// println!("{} instructions", instructions.len());
/// ```
pub fn render_report<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<Vec<RenderInstruction>> {
    let document = Document::from_file(path)?;
    Ok(ReportRenderer::for_document(&document, options).collect())
}

/// Render a report file and collect statistics.
pub fn render_report_with_stats<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let document = Document::from_file(path)?;
    Ok(ReportRenderer::for_document(&document, options).render_with_stats())
}

/// Render one view of the configured dashboard variant.
///
/// # Example
///
/// ```no_run
/// use reportdeck::{render_view, DashboardConfig};
///
/// let config = DashboardConfig::new(".");
/// let instructions = render_view(&config, "report")?;
/// # Ok::<(), reportdeck::Error>(())
/// ```
pub fn render_view(config: &DashboardConfig, key: &str) -> Result<Vec<RenderInstruction>> {
    Menu::for_variant(config.variant).render(key, config)
}

/// Builder for rendering dashboard pages.
///
/// # Example
///
/// ```no_run
/// use reportdeck::{Dashboard, Variant};
///
/// let markdown = Dashboard::new("/srv/olist")
///     .with_variant(Variant::Overview)
///     .with_preview_rows(20)
///     .page("categories")?
///     .to_markdown()?;
/// # Ok::<(), reportdeck::Error>(())
/// ```
pub struct Dashboard {
    config: DashboardConfig,
    menu: Menu,
}

impl Dashboard {
    /// Create a dashboard rooted at `root` with the default variant.
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self::from_config(DashboardConfig::new(root))
    }

    /// Create a dashboard from an existing configuration.
    pub fn from_config(config: DashboardConfig) -> Self {
        let menu = Menu::for_variant(config.variant);
        Self { config, menu }
    }

    /// Switch the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.config = self.config.with_variant(variant);
        self.menu = Menu::for_variant(variant);
        self
    }

    /// Override the data file.
    pub fn with_data_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.config = self.config.with_data_path(path);
        self
    }

    /// Override the image directory.
    pub fn with_image_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.config = self.config.with_image_dir(dir);
        self
    }

    /// Set the preview row cap.
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.config = self.config.with_preview_rows(rows);
        self
    }

    /// The session configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The menu for the current variant.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Render a view.
    pub fn page(&self, key: &str) -> Result<Page> {
        let instructions = self.menu.render(key, &self.config)?;
        Ok(Page {
            key: key.to_string(),
            instructions,
        })
    }
}

/// A rendered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// View key
    pub key: String,
    /// Instructions in display order
    pub instructions: Vec<RenderInstruction>,
}

impl Page {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.instructions)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.instructions)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.instructions, format)
    }

    /// Check whether any instruction is an error.
    pub fn has_errors(&self) -> bool {
        RenderInstruction::flatten(&self.instructions)
            .iter()
            .any(|i| i.is_error())
    }

    /// Check whether any instruction is a warning.
    pub fn has_warnings(&self) -> bool {
        RenderInstruction::flatten(&self.instructions)
            .iter()
            .any(|i| i.is_warning())
    }
}
