//! Report document types.

use crate::error::{Error, Result};
use crate::parser::{self, IMAGE_MARKER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A Markdown report loaded from disk or built in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Raw Markdown source
    source: String,

    /// File the source was read from, if any
    path: Option<PathBuf>,
}

impl Document {
    /// Create a document from Markdown text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: None,
        }
    }

    /// Read a UTF-8 Markdown report.
    ///
    /// A missing file is reported as [`Error::ReportNotFound`] so callers can
    /// tell it apart from other I/O failures.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ReportNotFound(path.to_path_buf()));
        }
        let source = fs::read_to_string(path)?;
        log::debug!("Loaded report {} ({} bytes)", path.display(), source.len());
        Ok(Self {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// The raw Markdown source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The file this document was read from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Sections in document order.
    pub fn sections(&self) -> Vec<Section<'_>> {
        parser::split_sections(&self.source).collect()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        parser::split_sections(&self.source).count()
    }

    /// Check if any section contains an image marker.
    pub fn has_image_marker(&self) -> bool {
        self.source.contains(IMAGE_MARKER)
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// A chunk of a document between two separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    index: usize,
    text: &'a str,
}

impl<'a> Section<'a> {
    /// Create a section at a 0-indexed position.
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    /// 0-indexed position in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Section text, without the separator.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Whether the section must be rendered line by line.
    ///
    /// Any occurrence of `![` counts, not only one at the start of a line.
    pub fn has_image_marker(&self) -> bool {
        self.text.contains(IMAGE_MARKER)
    }

    /// Lines of the section, split on `\n`, classified.
    pub fn lines(&self) -> impl Iterator<Item = Line<'a>> + 'a {
        self.text.split('\n').map(Line::classify)
    }
}

/// A single classified line of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Plain Markdown text
    Text(&'a str),
    /// A line starting with `![`
    Image(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a raw line.
    pub fn classify(raw: &'a str) -> Self {
        if parser::is_image_line(raw) {
            Line::Image(raw)
        } else {
            Line::Text(raw)
        }
    }

    /// The raw line content.
    pub fn raw(&self) -> &'a str {
        match self {
            Line::Text(s) | Line::Image(s) => s,
        }
    }

    /// Check if this is an image reference line.
    pub fn is_image(&self) -> bool {
        matches!(self, Line::Image(_))
    }
}

/// An inline image link, `![alt](target)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Alt text between `![` and `](`
    pub alt: String,

    /// Raw link target, e.g. `./images/reorder/chart.png`
    pub target: String,
}

impl ImageReference {
    /// Create a new image reference.
    pub fn new(alt: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            target: target.into(),
        }
    }

    /// The target with the image-root prefix removed.
    pub fn remainder<'s>(&'s self, prefix: &str) -> &'s str {
        parser::strip_image_prefix(&self.target, prefix)
    }
}
