//! Plain text rendering with Markdown markup stripped.

use regex::Regex;

use super::{to_markdown, RenderInstruction};
use crate::error::Result;

/// Strips inline Markdown so text reads cleanly in a plain terminal.
pub struct PlainTextFormatter {
    heading: Regex,
    emphasis: Regex,
    code: Regex,
    link: Regex,
    quote: Regex,
}

impl PlainTextFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?m)^#{1,6}\s+").unwrap(),
            emphasis: Regex::new(r"(\*\*|__|\*|~~)([^*_~\n]+?)(\*\*|__|\*|~~)").unwrap(),
            code: Regex::new(r"`([^`\n]+)`").unwrap(),
            link: Regex::new(r"!?\[([^\]\n]*)\]\(([^)\n]*)\)").unwrap(),
            quote: Regex::new(r"(?m)^>\s?").unwrap(),
        }
    }

    /// Strip markup from one Markdown block.
    pub fn strip(&self, markdown: &str) -> String {
        let text = self.heading.replace_all(markdown, "");
        let text = self.link.replace_all(&text, "$1 ($2)");
        let text = self.code.replace_all(&text, "$1");
        let text = self.emphasis.replace_all(&text, "$2");
        let text = self.quote.replace_all(&text, "");
        text.into_owned()
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert instructions to plain text.
pub fn to_text(instructions: &[RenderInstruction]) -> Result<String> {
    let markdown = to_markdown(instructions)?;
    Ok(PlainTextFormatter::new().strip(&markdown).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_inline_markup() {
        let formatter = PlainTextFormatter::new();
        assert_eq!(
            formatter.strip("## Price **200-500 BRL** band, see `bed_bath_table`"),
            "Price 200-500 BRL band, see bed_bath_table"
        );
        assert_eq!(formatter.strip("*italic* and ~~gone~~"), "italic and gone");
    }

    #[test]
    fn test_strip_links_and_quotes() {
        let formatter = PlainTextFormatter::new();
        assert_eq!(
            formatter.strip("> see [docs](https://example.com)"),
            "see docs (https://example.com)"
        );
    }

    #[test]
    fn test_to_text() {
        let instructions = vec![
            RenderInstruction::header("Summary"),
            RenderInstruction::text("**Bold** finding"),
        ];
        assert_eq!(to_text(&instructions).unwrap(), "Summary\n\nBold finding");
    }
}
