//! Data model for dashboard content.
//!
//! Reports are kept as raw Markdown and viewed through borrowed
//! [`Section`]s and [`Line`]s, so a render pass never copies the document.
//! Tables, metrics and downloads are the small value types the dashboard
//! views hand to a presenter.

mod asset;
mod document;
mod table;
mod widget;

pub use asset::Asset;
pub use document::{Document, ImageReference, Line, Section};
pub use table::DataTable;
pub use widget::{Download, Metric, Sidebar, CSV_MIME};
