//! Coloured terminal presenter.

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use reportdeck::model::Asset;
use reportdeck::render::{dispatch, Presenter, RenderInstruction, TableStyle, Tone, WarningKind};
use reportdeck::{DataTable, Download, Metric};

/// Rows printed for an interactive table before it is cut off.
const GRID_ROWS: usize = 20;

/// Writes instructions to a terminal stream.
pub struct TerminalPresenter<W: Write> {
    out: W,
    indent: usize,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, indent: 0 }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> reportdeck::Result<()> {
        writeln!(self.out, "{}{}", " ".repeat(self.indent), text)?;
        Ok(())
    }

    fn rule(&mut self) -> reportdeck::Result<()> {
        let rule = "─".repeat(60);
        self.line(&rule.dimmed().to_string())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn text(&mut self, content: &str) -> reportdeck::Result<()> {
        for line in content.lines() {
            self.line(line)?;
        }
        Ok(())
    }

    fn image(&mut self, path: &Path, caption: Option<&str>, full_width: bool) -> reportdeck::Result<()> {
        let label = caption.map(str::to_string).unwrap_or_else(|| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        let details = match Asset::load(path) {
            Ok(asset) => match asset.dimensions {
                Some((w, h)) => format!("{} {}x{}, {}", asset.format, w, h, asset.display_size()),
                None => format!("{}, {}", asset.format, asset.display_size()),
            },
            Err(e) => {
                log::debug!("Could not inspect {}: {}", path.display(), e);
                "unreadable".to_string()
            }
        };

        let width = if full_width { "full width" } else { "inline" };
        self.line(&format!(
            "{} {} {}",
            "[image]".magenta().bold(),
            label.bold(),
            format!("({}, {})", details, width).dimmed()
        ))?;
        self.line(&format!("        {}", path.display().to_string().dimmed()))
    }

    fn warning(&mut self, reason: WarningKind, detail: &str) -> reportdeck::Result<()> {
        self.line(&format!("{} {}: {}", "⚠".yellow(), reason.label().yellow(), detail))
    }

    fn error(&mut self, message: &str) -> reportdeck::Result<()> {
        self.line(&format!("{} {}", "✖".red().bold(), message.red()))
    }

    fn heading(&mut self, level: u8, text: &str) -> reportdeck::Result<()> {
        match level {
            1 => {
                self.line(&text.cyan().bold().to_string())?;
                self.rule()
            }
            2 => self.line(&text.cyan().to_string()),
            _ => self.line(&text.bold().to_string()),
        }
    }

    fn callout(&mut self, tone: Tone, content: &str) -> reportdeck::Result<()> {
        let bar = match tone {
            Tone::Info => "┃".blue(),
            Tone::Success => "┃".green(),
            Tone::Warning => "┃".yellow(),
        };
        for line in content.lines() {
            self.line(&format!("{} {}", bar, line.trim()))?;
        }
        Ok(())
    }

    fn metrics(&mut self, items: &[Metric]) -> reportdeck::Result<()> {
        for metric in items {
            let delta = metric
                .delta
                .as_deref()
                .map(|d| format!(" {}", d.green()))
                .unwrap_or_default();
            self.line(&format!("{}: {}{}", metric.label.dimmed(), metric.value.bold(), delta))?;
        }
        Ok(())
    }

    fn table(&mut self, table: &DataTable, style: TableStyle) -> reportdeck::Result<()> {
        let widths = table.column_widths();
        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
        };

        self.line(&format_row(&table.columns).bold().to_string())?;
        let limit = match style {
            TableStyle::Static => table.row_count(),
            TableStyle::Interactive => GRID_ROWS.min(table.row_count()),
        };
        for row in table.rows.iter().take(limit) {
            self.line(&format_row(row))?;
        }
        if limit < table.row_count() {
            let more = format!("... {} more rows", table.row_count() - limit);
            self.line(&more.dimmed().to_string())?;
        }
        Ok(())
    }

    fn columns(&mut self, columns: &[Vec<RenderInstruction>]) -> reportdeck::Result<()> {
        self.indent += 2;
        let result = columns.iter().flatten().try_for_each(|i| dispatch(i, self));
        self.indent -= 2;
        result
    }

    fn download(&mut self, download: &Download) -> reportdeck::Result<()> {
        self.line(&format!(
            "{} {} {}",
            "[download]".green().bold(),
            download.label,
            format!("({}, {})", download.file_name, download.mime_type).dimmed()
        ))
    }

    fn divider(&mut self) -> reportdeck::Result<()> {
        self.rule()
    }
}
