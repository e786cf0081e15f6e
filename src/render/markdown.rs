//! Markdown export of rendered views.

use std::path::Path;

use super::{present, Presenter, RenderInstruction, TableStyle, Tone, WarningKind};
use crate::error::Result;
use crate::model::DataTable;

/// Convert instructions to a single Markdown document.
///
/// Blocks are separated by blank lines. Images are written with their
/// resolved paths, warnings and errors as blockquotes.
pub fn to_markdown(instructions: &[RenderInstruction]) -> Result<String> {
    let mut renderer = MarkdownRenderer::new();
    present(instructions.iter().cloned(), &mut renderer)?;
    Ok(renderer.finish())
}

/// Presenter that accumulates Markdown.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    output: String,
}

impl MarkdownRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Markdown written so far, trimmed.
    pub fn finish(self) -> String {
        self.output.trim().to_string()
    }

    fn push_block(&mut self, block: &str) {
        let block = block.trim_matches('\n');
        if block.is_empty() {
            return;
        }
        if !self.output.is_empty() {
            self.output.push_str("\n\n");
        }
        self.output.push_str(block);
    }
}

impl Presenter for MarkdownRenderer {
    fn text(&mut self, content: &str) -> Result<()> {
        self.push_block(content);
        Ok(())
    }

    fn image(&mut self, path: &Path, caption: Option<&str>, _full_width: bool) -> Result<()> {
        let alt = caption.unwrap_or("");
        self.push_block(&format!("![{}]({})", alt, path.display()));
        Ok(())
    }

    fn warning(&mut self, reason: WarningKind, detail: &str) -> Result<()> {
        self.push_block(&format!("> **Warning:** {}: {}", reason.label(), detail));
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.push_block(&format!("> **Error:** {}", message));
        Ok(())
    }

    fn callout(&mut self, tone: Tone, content: &str) -> Result<()> {
        let label = match tone {
            Tone::Info => "Note",
            Tone::Success => "Success",
            Tone::Warning => "Attention",
        };
        let mut block = format!("> **{}**", label);
        for line in content.lines() {
            block.push_str("\n> ");
            block.push_str(line.trim());
        }
        self.push_block(&block);
        Ok(())
    }

    fn table(&mut self, table: &DataTable, _style: TableStyle) -> Result<()> {
        self.push_block(&table.to_markdown());
        Ok(())
    }
}
