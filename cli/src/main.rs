//! reportdeck CLI - terminal host for the analysis dashboard

mod interactive;
mod terminal;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use reportdeck::data::{load_download, DOWNLOAD_FILE_NAME};
use reportdeck::dashboard::Menu;
use reportdeck::render::{present, to_json, to_markdown, to_text};
use reportdeck::{render_report_with_stats, DashboardConfig, JsonFormat, RenderOptions, Variant};

use terminal::TerminalPresenter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "reportdeck")]
#[command(version)]
#[command(about = "Browse Markdown analysis reports and data in the terminal", long_about = None)]
struct Cli {
    /// Directory holding report/, images/ and data/
    #[arg(long, env = "REPORTDECK_ROOT", default_value = ".", global = true)]
    root: PathBuf,

    /// CSV file for the data view
    #[arg(long, env = "REPORTDECK_DATA", global = true)]
    data: Option<PathBuf>,

    /// Dashboard variant
    #[arg(long, value_enum, default_value = "integrated", global = true)]
    variant: VariantArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the views of the selected variant
    Views,

    /// Render one view
    Show {
        /// View key (see `reportdeck views`)
        #[arg(value_name = "VIEW")]
        view: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render an arbitrary Markdown report
    Report {
        /// Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Image directory (defaults to <root>/images)
        #[arg(long, value_name = "DIR")]
        images: Option<PathBuf>,

        /// Keep blank lines in sections that contain images
        #[arg(long)]
        keep_blank_lines: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Save the full CSV data file
    Download {
        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = DOWNLOAD_FILE_NAME)]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    /// Report viewer with journey, retention, data and insights
    Integrated,
    /// Overview, categories, prices and product attributes
    #[value(alias = "final")]
    Overview,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Integrated => Variant::Integrated,
            VariantArg::Overview => Variant::Overview,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Coloured terminal output
    Terminal,
    /// Markdown
    #[value(alias = "md")]
    Markdown,
    /// Plain text
    Text,
    /// Pretty JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    let result = match cli.command {
        Some(Commands::Views) => cmd_views(&config),
        Some(Commands::Show {
            view,
            format,
            output,
        }) => cmd_show(&config, &view, format, output.as_deref()),
        Some(Commands::Report {
            input,
            images,
            keep_blank_lines,
            format,
        }) => cmd_report(&config, &input, images, keep_blank_lines, format),
        Some(Commands::Download { output }) => cmd_download(&config, &output),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => interactive::run(&config),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> DashboardConfig {
    let mut config = DashboardConfig::new(&cli.root).with_variant(cli.variant.into());
    if let Some(data) = &cli.data {
        config = config.with_data_path(data);
    }
    log::debug!("Using {:?}", config);
    config
}

fn emit(
    instructions: &[reportdeck::RenderInstruction],
    format: OutputFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    let rendered = match format {
        OutputFormat::Terminal => {
            if output.is_some() {
                return Err("terminal output cannot be written to a file".into());
            }
            present(instructions.iter().cloned(), &mut TerminalPresenter::new(io::stdout()))?;
            return Ok(());
        }
        OutputFormat::Markdown => to_markdown(instructions)?,
        OutputFormat::Text => to_text(instructions)?,
        OutputFormat::Json => to_json(instructions, JsonFormat::Pretty)?,
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn cmd_views(config: &DashboardConfig) -> CliResult<()> {
    let menu = Menu::for_variant(config.variant);

    println!("{} ({})", menu.sidebar().title.cyan().bold(), config.variant);
    println!("{}", "─".repeat(40).dimmed());
    for view in menu.views() {
        println!("  {:<12} {}", view.key().bold(), view.title());
    }
    Ok(())
}

fn cmd_show(
    config: &DashboardConfig,
    view: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    let instructions = Menu::for_variant(config.variant).render(view, config)?;
    emit(&instructions, format, output)
}

fn cmd_report(
    config: &DashboardConfig,
    input: &Path,
    images: Option<PathBuf>,
    keep_blank_lines: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let options = RenderOptions::new()
        .with_image_dir(images.unwrap_or_else(|| config.image_dir.clone()))
        .with_blank_lines(keep_blank_lines);

    let result = render_report_with_stats(input, &options)?;
    emit(&result.instructions, format, None)?;

    let stats = &result.stats;
    eprintln!(
        "{} {} sections, {} text blocks, {} images, {} warnings",
        "Rendered".green(),
        stats.section_count,
        stats.text_count,
        stats.image_count,
        stats.warning_count
    );
    Ok(())
}

fn cmd_download(config: &DashboardConfig, output: &Path) -> CliResult<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Reading {}...", config.data_path.display()));

    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DOWNLOAD_FILE_NAME.to_string());

    let payload = match load_download(&config.data_path, &file_name) {
        Ok(payload) => payload,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };
    fs::write(output, &payload.bytes)?;
    pb.finish_with_message("Done!");

    println!(
        "{} {} ({}, {} bytes)",
        "Saved to".green(),
        output.display(),
        payload.mime_type,
        payload.size()
    );
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "reportdeck".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown analysis report dashboard");
    println!();
    println!("Variants: {}", Variant::ALL.map(|v| v.key()).join(", "));
    println!("License: MIT");
}
