//! Tabular data for summary tables and CSV previews.

use serde::{Deserialize, Serialize};

/// A rectangular table of display strings with a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    /// Column names
    pub columns: Vec<String>,

    /// Rows, each padded to `columns.len()`
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, builder style.
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(cells);
        self
    }

    /// Append a row. Short rows are padded with empty cells, long rows are
    /// truncated to the column count.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let width = self.columns.len();
        let mut row: Vec<String> = cells.into_iter().take(width).map(Into::into).collect();
        row.resize(width, String::new());
        self.rows.push(row);
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell by row and column index.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Widest cell per column, header included, in characters.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Render as a GitHub-flavoured Markdown table.
    pub fn to_markdown(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push('|');
        for column in &self.columns {
            output.push_str(&format!(" {} |", escape_cell(column)));
        }
        output.push('\n');

        output.push('|');
        for _ in &self.columns {
            output.push_str(" --- |");
        }
        output.push('\n');

        for row in &self.rows {
            output.push('|');
            for cell in row {
                output.push_str(&format!(" {} |", escape_cell(cell)));
            }
            output.push('\n');
        }
        output
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder_pads_rows() {
        let table = DataTable::new(["band", "orders", "share"])
            .with_row(["0-50", "22028"])
            .with_row(["50-100", "32778", "11.8%", "extra"]);

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 2), Some(""));
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.cell(5, 0), None);
    }

    #[test]
    fn test_column_widths() {
        let table = DataTable::new(["a", "long header"]).with_row(["wide cell", "x"]);
        assert_eq!(table.column_widths(), vec![9, 11]);
    }

    #[test]
    fn test_to_markdown() {
        let table = DataTable::new(["category", "revenue"]).with_row(["a|b", "10"]);
        let md = table.to_markdown();

        assert!(md.starts_with("| category | revenue |\n"));
        assert!(md.contains("| --- | --- |"));
        assert!(md.contains("| a\\|b | 10 |"));
    }
}
