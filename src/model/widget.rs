//! Small display widgets: metrics, download controls and the sidebar.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// MIME type of the CSV download.
pub const CSV_MIME: &str = "text/csv";

/// A headline number with an optional delta line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Short label, e.g. "Orders"
    pub label: String,
    /// Displayed value
    pub value: String,
    /// Secondary line under the value
    pub delta: Option<String>,
}

impl Metric {
    /// Create a metric without a delta.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    /// Set the delta line.
    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

/// A control offering a file for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    /// Button label
    pub label: String,
    /// Suggested file name
    pub file_name: String,
    /// MIME type of the payload
    pub mime_type: String,
    /// File the payload is produced from
    pub source: PathBuf,
}

impl Download {
    /// A CSV download of `source`.
    pub fn csv(
        label: impl Into<String>,
        file_name: impl Into<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            label: label.into(),
            file_name: file_name.into(),
            mime_type: CSV_MIME.to_string(),
            source: source.into(),
        }
    }
}

/// Static navigation chrome shown next to the menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    /// Sidebar title
    pub title: String,
    /// Prompt above the menu
    pub menu_label: String,
    /// Informational panel under the menu
    pub info: Option<String>,
    /// Footer caption
    pub caption: Option<String>,
}
