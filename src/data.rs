//! CSV data preview and download payloads.
//!
//! The data view shows a capped preview of the transaction table and offers
//! the whole file for download. Both read the file fresh on every call.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{Error, Result};
use crate::model::{DataTable, CSV_MIME};

/// Rows shown in the data preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 100;

/// File name offered for the CSV download.
pub const DOWNLOAD_FILE_NAME: &str = "transaction_level_table.csv";

/// A file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPayload {
    /// Suggested file name
    pub file_name: String,
    /// MIME type
    pub mime_type: String,
    /// File content
    pub bytes: Vec<u8>,
}

impl DownloadPayload {
    /// Payload size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.is_file() {
        return Err(Error::DataNotFound(path.to_path_buf()));
    }
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    Ok(reader)
}

fn read_headers(reader: &mut csv::Reader<std::fs::File>, path: &Path) -> Result<StringRecord> {
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(Error::MissingHeader(PathBuf::from(path)));
    }
    Ok(headers)
}

/// Load the header and the first `limit` rows of a CSV file.
///
/// # Example
///
/// ```no_run
/// use reportdeck::data::{load_preview, DEFAULT_PREVIEW_ROWS};
///
/// let table = load_preview("data/transaction_level_table.csv", DEFAULT_PREVIEW_ROWS)?;
/// println!("{} columns, {} rows", table.column_count(), table.row_count());
/// # Ok::<(), reportdeck::Error>(())
/// ```
pub fn load_preview<P: AsRef<Path>>(path: P, limit: usize) -> Result<DataTable> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let mut table = DataTable::new(headers.iter());
    for record in reader.records().take(limit) {
        let record = record?;
        table.push_row(record.iter());
    }

    log::debug!(
        "Loaded preview of {}: {} columns, {} rows",
        path.display(),
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

/// Re-serialise the whole CSV file for download.
///
/// Every record passes through the CSV reader and writer, so quoting is
/// normalised but no row is dropped.
pub fn load_download<P: AsRef<Path>>(path: P, file_name: &str) -> Result<DownloadPayload> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    writer.write_record(&headers)?;

    let mut rows = 0usize;
    for record in reader.records() {
        writer.write_record(&record?)?;
        rows += 1;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    log::debug!("Prepared download of {} rows ({} bytes)", rows, bytes.len());

    Ok(DownloadPayload {
        file_name: file_name.to_string(),
        mime_type: CSV_MIME.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_preview_caps_rows() {
        let mut content = String::from("order_id,price\n");
        for i in 0..250 {
            content.push_str(&format!("o{},{}\n", i, i * 10));
        }
        let file = write_csv(&content);

        let table = load_preview(file.path(), DEFAULT_PREVIEW_ROWS).unwrap();
        assert_eq!(table.columns, vec!["order_id", "price"]);
        assert_eq!(table.row_count(), 100);
        assert_eq!(table.cell(99, 0), Some("o99"));
    }

    #[test]
    fn test_preview_pads_ragged_rows() {
        let file = write_csv("a,b,c\n1,2\n3,4,5,6\n");
        let table = load_preview(file.path(), 10).unwrap();

        assert_eq!(table.rows, vec![vec!["1", "2", ""], vec!["3", "4", "5"]]);
    }

    #[test]
    fn test_preview_missing_file() {
        let result = load_preview("/no/such/data.csv", 10);
        assert!(matches!(result, Err(Error::DataNotFound(_))));
    }

    #[test]
    fn test_preview_empty_file() {
        let file = write_csv("");
        let result = load_preview(file.path(), 10);
        assert!(matches!(result, Err(Error::MissingHeader(_))));
    }

    #[test]
    fn test_download_keeps_every_row() {
        let file = write_csv("id,name\n1,\"Smith, J\"\n2,Lee\n");
        let payload = load_download(file.path(), DOWNLOAD_FILE_NAME).unwrap();

        assert_eq!(payload.mime_type, "text/csv");
        assert_eq!(payload.file_name, "transaction_level_table.csv");
        assert_eq!(
            String::from_utf8(payload.bytes.clone()).unwrap(),
            "id,name\n1,\"Smith, J\"\n2,Lee\n"
        );
        assert_eq!(payload.size(), payload.bytes.len());
    }
}
