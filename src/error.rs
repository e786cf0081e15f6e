//! Error types for the reportdeck library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for reportdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or presenting dashboard content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The Markdown report file does not exist.
    #[error("Report not found: {}", .0.display())]
    ReportNotFound(PathBuf),

    /// The tabular data file does not exist.
    #[error("Data file not found: {}", .0.display())]
    DataNotFound(PathBuf),

    /// An image asset does not exist.
    #[error("Asset not found: {}", .0.display())]
    AssetNotFound(PathBuf),

    /// A link target that cannot be joined safely onto the image directory.
    #[error("Invalid asset path: {0}")]
    InvalidAssetPath(String),

    /// The file is not a recognised raster image.
    #[error("Unknown image format")]
    UnknownImageFormat,

    /// Error reading or writing CSV data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV file has no header row.
    #[error("CSV file has no header row: {}", .0.display())]
    MissingHeader(PathBuf),

    /// The requested view is not part of the menu.
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Error during rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ReportNotFound(PathBuf::from("report/summary.md"));
        assert_eq!(err.to_string(), "Report not found: report/summary.md");

        let err = Error::UnknownView("nope".to_string());
        assert_eq!(err.to_string(), "Unknown view: nope");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
