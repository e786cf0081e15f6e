//! Report parsing: section splitting and image-line recognition.
//!
//! Splitting is a plain substring split on [`SECTION_SEPARATOR`], not a
//! Markdown block parse. A `---` inside a fenced code block or a table
//! delimiter row also splits. Callers only see [`split_sections`], so a
//! block-aware splitter can replace it without touching the renderer.

mod image_ref;
mod sections;

pub use image_ref::{is_image_line, parse_image_line, strip_image_prefix};
pub use sections::{join_sections, split_sections, Sections};

/// Literal separator between report sections.
pub const SECTION_SEPARATOR: &str = "---";

/// Marker that opens a Markdown image.
pub const IMAGE_MARKER: &str = "![";

/// Link-target prefix that denotes the image directory.
pub const DEFAULT_IMAGE_PREFIX: &str = "./images/";
