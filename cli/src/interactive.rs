//! Interactive menu loop.

use std::fs;
use std::io;
use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use reportdeck::dashboard::Menu;
use reportdeck::data::load_download;
use reportdeck::render::present;
use reportdeck::{DashboardConfig, RenderInstruction};

use crate::terminal::TerminalPresenter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Show the sidebar and loop over menu selections until Exit.
pub fn run(config: &DashboardConfig) -> CliResult<()> {
    let menu = Menu::for_variant(config.variant);
    print_sidebar(&menu);

    let mut items: Vec<&str> = menu.titles();
    items.push("Exit");
    let exit = items.len() - 1;
    let mut selection = 0;

    loop {
        println!();
        selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(menu.sidebar().menu_label.as_str())
            .items(&items)
            .default(selection)
            .interact()?;

        if selection == exit {
            break;
        }

        let view = &menu.views()[selection];
        let instructions = view.render(config);
        println!();
        present(instructions.iter().cloned(), &mut TerminalPresenter::new(io::stdout()))?;

        if let Some(download) = find_download(&instructions) {
            offer_download(download)?;
        }
    }

    if let Some(caption) = &menu.sidebar().caption {
        println!("\n{}", caption.dimmed());
    }
    Ok(())
}

fn print_sidebar(menu: &Menu) {
    let sidebar = menu.sidebar();
    println!("{}", sidebar.title.cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    if let Some(info) = &sidebar.info {
        for line in info.lines() {
            println!("{}", line.replace("**", "").blue());
        }
    }
}

fn find_download(instructions: &[RenderInstruction]) -> Option<&reportdeck::Download> {
    RenderInstruction::flatten(instructions)
        .into_iter()
        .find_map(|i| match i {
            RenderInstruction::Download { download } => Some(download),
            _ => None,
        })
}

fn offer_download(download: &reportdeck::Download) -> CliResult<()> {
    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}?", download.label))
        .default(false)
        .interact()?;
    if !save {
        return Ok(());
    }

    let target: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Save as")
        .with_initial_text(download.file_name.as_str())
        .interact_text()?;

    let payload = load_download(&download.source, &download.file_name)?;
    let target = PathBuf::from(target);
    fs::write(&target, &payload.bytes)?;
    println!(
        "{} {} ({} bytes)",
        "Saved to".green(),
        target.display(),
        payload.size()
    );
    Ok(())
}
