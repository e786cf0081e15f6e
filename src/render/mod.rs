//! Rendering module: report rendering, instruction types and presenters.

mod instruction;
mod json;
mod markdown;
mod options;
mod presenter;
mod report;
mod resolve;
mod result;
mod text;

pub use instruction::{RenderInstruction, TableStyle, Tone, WarningKind};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use presenter::{dispatch, present, Presenter};
pub use report::{render_markdown, render_report_file, ReportRenderer};
pub use resolve::{join_asset_path, AssetResolver, Resolution};
pub use result::{RenderResult, RenderStats};
pub use text::{to_text, PlainTextFormatter};
