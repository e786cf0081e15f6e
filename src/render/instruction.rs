//! Renderer-agnostic display instructions.

use crate::model::{DataTable, Download, Metric};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One display step, executed in order by a presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Markdown text, formatted by the host.
    Text {
        /// Raw Markdown
        content: String,
    },

    /// An image that exists on disk.
    Image {
        /// Resolved path
        path: PathBuf,
        /// Caption under the image
        caption: Option<String>,
        /// Stretch to the container width
        full_width: bool,
    },

    /// Inline, non-fatal problem at the point it occurred.
    Warning {
        /// What went wrong
        reason: WarningKind,
        /// The offending relative path or line
        detail: String,
    },

    /// Replaces a view's content when its input is missing.
    Error {
        /// User-facing message
        message: String,
    },

    /// Page title, header or subheader.
    Heading {
        /// 1 = title, 2 = header, 3 = subheader
        level: u8,
        /// Heading text
        text: String,
    },

    /// Highlighted panel.
    Callout {
        /// Panel colour
        tone: Tone,
        /// Markdown body
        content: String,
    },

    /// A row of headline numbers.
    Metrics {
        /// Metrics, left to right
        items: Vec<Metric>,
    },

    /// A table.
    Table {
        /// Table data
        table: DataTable,
        /// Static or scrollable
        style: TableStyle,
    },

    /// Side-by-side columns, each its own instruction list.
    Columns {
        /// Columns, left to right
        columns: Vec<Vec<RenderInstruction>>,
    },

    /// A file download control.
    Download {
        /// Download description
        download: Download,
    },

    /// Horizontal divider.
    Divider,
}

/// Why a warning was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The resolved image file does not exist
    MissingAsset,
    /// The link target would escape the image directory
    InvalidAssetPath,
    /// An image line without a `](` link
    MalformedImageLine,
}

impl WarningKind {
    /// Prefix shown before the warning detail.
    pub fn label(&self) -> &'static str {
        match self {
            WarningKind::MissingAsset => "Image not found",
            WarningKind::InvalidAssetPath => "Rejected image path",
            WarningKind::MalformedImageLine => "Malformed image link",
        }
    }
}

/// Callout colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Neutral information
    #[default]
    Info,
    /// Positive finding
    Success,
    /// Needs attention
    Warning,
}

/// How a table is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    /// Fixed table showing every row
    #[default]
    Static,
    /// Scrollable data grid
    Interactive,
}

impl RenderInstruction {
    /// Markdown text.
    pub fn text(content: impl Into<String>) -> Self {
        RenderInstruction::Text {
            content: content.into(),
        }
    }

    /// A full-width image without caption.
    pub fn image(path: impl Into<PathBuf>) -> Self {
        RenderInstruction::Image {
            path: path.into(),
            caption: None,
            full_width: true,
        }
    }

    /// A warning.
    pub fn warning(reason: WarningKind, detail: impl Into<String>) -> Self {
        RenderInstruction::Warning {
            reason,
            detail: detail.into(),
        }
    }

    /// A missing-image warning carrying the relative path.
    pub fn missing_asset(remainder: impl Into<String>) -> Self {
        Self::warning(WarningKind::MissingAsset, remainder)
    }

    /// An error message.
    pub fn error(message: impl Into<String>) -> Self {
        RenderInstruction::Error {
            message: message.into(),
        }
    }

    /// Level-1 heading.
    pub fn title(text: impl Into<String>) -> Self {
        Self::heading(1, text)
    }

    /// Level-2 heading.
    pub fn header(text: impl Into<String>) -> Self {
        Self::heading(2, text)
    }

    /// Level-3 heading.
    pub fn subheader(text: impl Into<String>) -> Self {
        Self::heading(3, text)
    }

    fn heading(level: u8, text: impl Into<String>) -> Self {
        RenderInstruction::Heading {
            level,
            text: text.into(),
        }
    }

    /// A callout panel.
    pub fn callout(tone: Tone, content: impl Into<String>) -> Self {
        RenderInstruction::Callout {
            tone,
            content: content.into(),
        }
    }

    /// A static table.
    pub fn table(table: DataTable) -> Self {
        RenderInstruction::Table {
            table,
            style: TableStyle::Static,
        }
    }

    /// A scrollable data grid.
    pub fn data_grid(table: DataTable) -> Self {
        RenderInstruction::Table {
            table,
            style: TableStyle::Interactive,
        }
    }

    /// Check if this is a text instruction.
    pub fn is_text(&self) -> bool {
        matches!(self, RenderInstruction::Text { .. })
    }

    /// Check if this is an image instruction.
    pub fn is_image(&self) -> bool {
        matches!(self, RenderInstruction::Image { .. })
    }

    /// Check if this is a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, RenderInstruction::Warning { .. })
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, RenderInstruction::Error { .. })
    }

    /// Text content, if this is a text instruction.
    pub fn content(&self) -> Option<&str> {
        match self {
            RenderInstruction::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Image path, if this is an image instruction.
    pub fn image_path(&self) -> Option<&Path> {
        match self {
            RenderInstruction::Image { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Warning detail, if this is a warning.
    pub fn warning_detail(&self) -> Option<&str> {
        match self {
            RenderInstruction::Warning { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Flatten nested columns into a single ordered sequence.
    pub fn flatten(instructions: &[RenderInstruction]) -> Vec<&RenderInstruction> {
        let mut flat = Vec::new();
        for instruction in instructions {
            match instruction {
                RenderInstruction::Columns { columns } => {
                    for column in columns {
                        flat.extend(Self::flatten(column));
                    }
                }
                other => flat.push(other),
            }
        }
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_accessors() {
        let text = RenderInstruction::text("hello");
        assert!(text.is_text());
        assert_eq!(text.content(), Some("hello"));
        assert!(text.image_path().is_none());

        let image = RenderInstruction::image("/a/b.png");
        assert!(image.is_image());
        assert_eq!(image.image_path(), Some(Path::new("/a/b.png")));

        let warning = RenderInstruction::missing_asset("x.png");
        assert!(warning.is_warning());
        assert_eq!(warning.warning_detail(), Some("x.png"));

        assert!(RenderInstruction::error("boom").is_error());
    }

    #[test]
    fn test_flatten_columns() {
        let instructions = vec![
            RenderInstruction::header("h"),
            RenderInstruction::Columns {
                columns: vec![
                    vec![RenderInstruction::text("left")],
                    vec![RenderInstruction::text("right"), RenderInstruction::Divider],
                ],
            },
        ];

        let flat = RenderInstruction::flatten(&instructions);
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[2].content(), Some("right"));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&RenderInstruction::missing_asset("x.png")).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"warning","reason":"missing_asset","detail":"x.png"}"#
        );

        let back: RenderInstruction = serde_json::from_str(r#"{"kind":"divider"}"#).unwrap();
        assert_eq!(back, RenderInstruction::Divider);
    }
}
