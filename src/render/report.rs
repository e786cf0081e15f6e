//! Report renderer: Markdown with embedded images to display instructions.
//!
//! [`ReportRenderer`] is an iterator. It walks the document one section at a
//! time and only switches to line-by-line mode for sections that contain an
//! image marker, so tables and lists in image-free sections reach the host
//! as one intact block.
//!
//! # Example
//!
//! ```no_run
//! use reportdeck::render::{ReportRenderer, RenderInstruction, RenderOptions};
//!
//! let markdown = std::fs::read_to_string("report/integrated_analysis_report.md")?;
//! let options = RenderOptions::new().with_image_dir("images");
//!
//! for instruction in ReportRenderer::new(&markdown, &options) {
//!     match instruction {
//!         RenderInstruction::Text { content } => println!("{}", content),
//!         RenderInstruction::Image { path, .. } => println!("[image] {}", path.display()),
//!         other => println!("{:?}", other),
//!     }
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

use std::path::Path;

use super::{
    AssetResolver, RenderInstruction, RenderOptions, RenderResult, RenderStats, Resolution,
    WarningKind,
};
use crate::error::Error;
use crate::model::{Document, Line};
use crate::parser::{self, Sections};

/// Lazily renders one document.
pub struct ReportRenderer<'a> {
    sections: Sections<'a>,
    lines: Option<std::str::Split<'a, char>>,
    options: &'a RenderOptions,
    stats: RenderStats,
    done: bool,
}

impl<'a> ReportRenderer<'a> {
    /// Create a renderer over Markdown text.
    pub fn new(document: &'a str, options: &'a RenderOptions) -> Self {
        Self {
            sections: parser::split_sections(document),
            lines: None,
            options,
            stats: RenderStats::new(),
            done: false,
        }
    }

    /// Create a renderer over a loaded document.
    pub fn for_document(document: &'a Document, options: &'a RenderOptions) -> Self {
        Self::new(document.source(), options)
    }

    /// Counters for the instructions emitted so far.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Check if every section has been consumed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Drain the renderer, keeping its statistics.
    pub fn render_with_stats(mut self) -> RenderResult {
        let instructions: Vec<_> = self.by_ref().collect();
        RenderResult::new(instructions, self.stats)
    }

    fn resolver(&self) -> AssetResolver<'a> {
        AssetResolver::new(&self.options.image_dir, &self.options.image_path_prefix)
    }

    fn render_line(&self, line: &'a str) -> Option<RenderInstruction> {
        match Line::classify(line) {
            Line::Image(raw) => Some(self.render_image_line(raw)),
            Line::Text(raw) => {
                if self.options.skip_blank_lines && raw.trim().is_empty() {
                    None
                } else {
                    Some(RenderInstruction::text(raw))
                }
            }
        }
    }

    fn render_image_line(&self, raw: &str) -> RenderInstruction {
        let Some(reference) = parser::parse_image_line(raw) else {
            log::warn!("Image line without link target: {}", raw);
            return RenderInstruction::warning(WarningKind::MalformedImageLine, raw);
        };

        match self.resolver().resolve_target(&reference.target) {
            Resolution::Found(path) => RenderInstruction::Image {
                path,
                caption: None,
                full_width: self.options.full_width_images,
            },
            Resolution::Missing { remainder, .. } => RenderInstruction::missing_asset(remainder),
            Resolution::Invalid { remainder } => {
                RenderInstruction::warning(WarningKind::InvalidAssetPath, remainder)
            }
        }
    }
}

impl<'a> Iterator for ReportRenderer<'a> {
    type Item = RenderInstruction;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(lines) = self.lines.as_mut() {
                match lines.next() {
                    Some(line) => {
                        if let Some(instruction) = self.render_line(line) {
                            self.stats.record(&instruction);
                            return Some(instruction);
                        }
                        continue;
                    }
                    None => self.lines = None,
                }
            }

            let Some(section) = self.sections.next() else {
                self.done = true;
                return None;
            };

            let line_oriented = section.has_image_marker();
            self.stats.add_section(line_oriented);

            if line_oriented {
                log::debug!("Section {} rendered line by line", section.index());
                self.lines = Some(section.text().split('\n'));
            } else {
                let instruction = RenderInstruction::text(section.text());
                self.stats.record(&instruction);
                return Some(instruction);
            }
        }
    }
}

/// Render Markdown text to a list of instructions.
pub fn render_markdown(document: &str, options: &RenderOptions) -> Vec<RenderInstruction> {
    ReportRenderer::new(document, options).collect()
}

/// Load and render a report file.
///
/// A missing file yields a single `Error` instruction instead of content;
/// the renderer itself never runs in that case.
pub fn render_report_file<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Vec<RenderInstruction> {
    match Document::from_file(path.as_ref()) {
        Ok(document) => ReportRenderer::for_document(&document, options).collect(),
        Err(Error::ReportNotFound(missing)) => {
            log::warn!("Report not found: {}", missing.display());
            vec![RenderInstruction::error(format!(
                "Report not found: {}",
                missing.display()
            ))]
        }
        Err(e) => {
            log::warn!("Failed to read report {}: {}", path.as_ref().display(), e);
            vec![RenderInstruction::error(e.to_string())]
        }
    }
}
