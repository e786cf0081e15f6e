//! Presenter trait for executing render instructions.
//!
//! A host implements [`Presenter`] and hands instruction lists to
//! [`present`]. Only text, image, warning and error are required; every
//! other instruction has a default that falls back to Markdown text, so a
//! minimal host still shows everything.
//!
//! # Example
//!
//! ```
//! use reportdeck::render::{present, Presenter, RenderInstruction, WarningKind};
//! use std::path::Path;
//!
//! #[derive(Default)]
//! struct Counter(usize);
//!
//! impl Presenter for Counter {
//!     fn text(&mut self, _content: &str) -> reportdeck::Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//!     fn image(&mut self, _: &Path, _: Option<&str>, _: bool) -> reportdeck::Result<()> {
//!         Ok(())
//!     }
//!     fn warning(&mut self, _: WarningKind, _: &str) -> reportdeck::Result<()> {
//!         Ok(())
//!     }
//!     fn error(&mut self, _: &str) -> reportdeck::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! present(vec![RenderInstruction::text("a"), RenderInstruction::header("b")], &mut counter)?;
//! assert_eq!(counter.0, 2);
//! # Ok::<(), reportdeck::Error>(())
//! ```

use std::path::Path;

use super::{RenderInstruction, TableStyle, Tone, WarningKind};
use crate::error::Result;
use crate::model::{DataTable, Download, Metric};

/// Executes display instructions on some output surface.
pub trait Presenter {
    /// Show a Markdown text block.
    fn text(&mut self, content: &str) -> Result<()>;

    /// Show an image that exists at `path`.
    fn image(&mut self, path: &Path, caption: Option<&str>, full_width: bool) -> Result<()>;

    /// Show an inline warning.
    fn warning(&mut self, reason: WarningKind, detail: &str) -> Result<()>;

    /// Show an error in place of a view's content.
    fn error(&mut self, message: &str) -> Result<()>;

    /// Show a heading (1 = title, 2 = header, 3 = subheader).
    fn heading(&mut self, level: u8, text: &str) -> Result<()> {
        let hashes = "#".repeat(level.clamp(1, 6) as usize);
        self.text(&format!("{} {}", hashes, text))
    }

    /// Show a highlighted panel.
    fn callout(&mut self, tone: Tone, content: &str) -> Result<()> {
        let _ = tone;
        let quoted: Vec<String> = content.lines().map(|l| format!("> {}", l.trim())).collect();
        self.text(&quoted.join("\n"))
    }

    /// Show a row of metrics.
    fn metrics(&mut self, items: &[Metric]) -> Result<()> {
        let lines: Vec<String> = items
            .iter()
            .map(|m| match &m.delta {
                Some(delta) => format!("- **{}**: {} ({})", m.label, m.value, delta),
                None => format!("- **{}**: {}", m.label, m.value),
            })
            .collect();
        self.text(&lines.join("\n"))
    }

    /// Show a table.
    fn table(&mut self, table: &DataTable, style: TableStyle) -> Result<()> {
        let _ = style;
        self.text(&table.to_markdown())
    }

    /// Show side-by-side columns. The default stacks them.
    fn columns(&mut self, columns: &[Vec<RenderInstruction>]) -> Result<()> {
        for column in columns {
            for instruction in column {
                dispatch(instruction, self)?;
            }
        }
        Ok(())
    }

    /// Show a download control.
    fn download(&mut self, download: &Download) -> Result<()> {
        self.text(&format!(
            "[{}]({}) ({}, `{}`)",
            download.label,
            download.source.display(),
            download.mime_type,
            download.file_name
        ))
    }

    /// Show a horizontal divider.
    fn divider(&mut self) -> Result<()> {
        self.text("---")
    }
}

/// Execute instructions in order.
///
/// Stops at the first presenter error; instructions themselves never fail.
pub fn present<I, P>(instructions: I, presenter: &mut P) -> Result<()>
where
    I: IntoIterator<Item = RenderInstruction>,
    P: Presenter + ?Sized,
{
    for instruction in instructions {
        dispatch(&instruction, presenter)?;
    }
    Ok(())
}

/// Execute a single instruction.
pub fn dispatch<P: Presenter + ?Sized>(
    instruction: &RenderInstruction,
    presenter: &mut P,
) -> Result<()> {
    match instruction {
        RenderInstruction::Text { content } => presenter.text(content),
        RenderInstruction::Image {
            path,
            caption,
            full_width,
        } => presenter.image(path, caption.as_deref(), *full_width),
        RenderInstruction::Warning { reason, detail } => presenter.warning(*reason, detail),
        RenderInstruction::Error { message } => presenter.error(message),
        RenderInstruction::Heading { level, text } => presenter.heading(*level, text),
        RenderInstruction::Callout { tone, content } => presenter.callout(*tone, content),
        RenderInstruction::Metrics { items } => presenter.metrics(items),
        RenderInstruction::Table { table, style } => presenter.table(table, *style),
        RenderInstruction::Columns { columns } => presenter.columns(columns),
        RenderInstruction::Download { download } => presenter.download(download),
        RenderInstruction::Divider => presenter.divider(),
    }
}
