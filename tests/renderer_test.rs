//! Integration tests for the report renderer.

use std::fs;
use std::path::{Path, PathBuf};

use reportdeck::parser::{join_sections, split_sections};
use reportdeck::render::{
    join_asset_path, render_markdown, render_report_file, RenderInstruction, RenderOptions,
    ReportRenderer, WarningKind,
};

const SCENARIO: &str = "Header\n---\n![alt](./images/x.png)\n---\nFooter";

fn image_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

fn options_for(dir: &Path) -> RenderOptions {
    RenderOptions::new().with_image_dir(dir)
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"\x89PNG\r\n\x1a\n").unwrap();
}

/// Trimmed text of a text instruction, or the instruction itself otherwise.
fn trimmed(instruction: &RenderInstruction) -> RenderInstruction {
    match instruction {
        RenderInstruction::Text { content } => RenderInstruction::text(content.trim()),
        other => other.clone(),
    }
}

#[test]
fn test_scenario_image_present() {
    let dir = image_dir();
    touch(&dir.path().join("x.png"));

    let instructions: Vec<_> = render_markdown(SCENARIO, &options_for(dir.path()))
        .iter()
        .map(trimmed)
        .collect();

    assert_eq!(
        instructions,
        vec![
            RenderInstruction::text("Header"),
            RenderInstruction::image(dir.path().join("x.png")),
            RenderInstruction::text("Footer"),
        ]
    );
}

#[test]
fn test_scenario_image_missing() {
    let dir = image_dir();

    let instructions: Vec<_> = render_markdown(SCENARIO, &options_for(dir.path()))
        .iter()
        .map(trimmed)
        .collect();

    assert_eq!(
        instructions,
        vec![
            RenderInstruction::text("Header"),
            RenderInstruction::warning(WarningKind::MissingAsset, "x.png"),
            RenderInstruction::text("Footer"),
        ]
    );
}

#[test]
fn test_scenario_table_section_is_one_block() {
    let table = "\n| Category | Revenue |\n| --- | --- |\n| auto | 855,096 |\n| telephony | 487,190 |\n";
    let document = format!("# Categories\n---{}", table);

    let instructions = render_markdown(&document, &RenderOptions::default());

    // The table delimiter row also contains `---`, so it splits too.
    let sections: Vec<&str> = document.split("---").collect();
    assert_eq!(instructions.len(), sections.len());
    for (instruction, section) in instructions.iter().zip(&sections) {
        assert_eq!(instruction, &RenderInstruction::text(*section));
    }
}

#[test]
fn test_table_without_separator_keeps_newlines() {
    let table = "| Band | Share |\n| :-: | :-: |\n| 0-50 | 3.6% |\n| 50-100 | 11.8% |";
    let instructions = render_markdown(table, &RenderOptions::default());

    assert_eq!(instructions, vec![RenderInstruction::text(table)]);
    assert_eq!(instructions[0].content().unwrap().lines().count(), 4);
}

#[test]
fn test_image_free_sections_are_byte_exact() {
    let document = "  # Title  \n\ntext\n---\n\n- a\n- b\n\n---\n";
    let instructions = render_markdown(document, &RenderOptions::default());

    let expected: Vec<RenderInstruction> = document
        .split("---")
        .map(RenderInstruction::text)
        .collect();
    assert_eq!(instructions, expected);
}

#[test]
fn test_split_join_round_trip() {
    for document in [
        "",
        "---",
        "a---b",
        "----",
        SCENARIO,
        "# Report\n\n```\n---\n```\n|a|\n|---|\n",
    ] {
        let sections: Vec<&str> = split_sections(document).map(|s| s.text()).collect();
        assert_eq!(join_sections(sections), document);
    }
}

#[test]
fn test_multi_segment_image_path() {
    assert_eq!(
        join_asset_path(Path::new("/a/b"), "reorder/chart.png").unwrap(),
        PathBuf::from("/a/b/reorder/chart.png")
    );

    let dir = image_dir();
    let chart = dir.path().join("reorder").join("chart.png");
    touch(&chart);

    let instructions = render_markdown(
        "![Retention](./images/reorder/chart.png)",
        &options_for(dir.path()),
    );
    assert_eq!(instructions, vec![RenderInstruction::image(chart)]);
}

#[test]
fn test_missing_image_does_not_stop_rendering() {
    let dir = image_dir();
    touch(&dir.path().join("b.png"));

    let document = "Intro\n![a](./images/a.png)\n![b](./images/b.png)\nOutro";
    let instructions = render_markdown(document, &options_for(dir.path()));

    assert_eq!(
        instructions,
        vec![
            RenderInstruction::text("Intro"),
            RenderInstruction::missing_asset("a.png"),
            RenderInstruction::image(dir.path().join("b.png")),
            RenderInstruction::text("Outro"),
        ]
    );
}

#[test]
fn test_found_image_has_no_warning() {
    let dir = image_dir();
    touch(&dir.path().join("journey").join("stage1.png"));

    let instructions = render_markdown(
        "![s](./images/journey/stage1.png)",
        &options_for(dir.path()),
    );
    assert!(instructions.iter().all(|i| !i.is_warning()));
    assert_eq!(
        instructions[0].image_path(),
        Some(dir.path().join("journey").join("stage1.png").as_path())
    );
}

#[test]
fn test_traversal_is_rejected() {
    let dir = image_dir();
    let instructions = render_markdown("![x](./images/../secret.png)", &options_for(dir.path()));

    assert_eq!(
        instructions,
        vec![RenderInstruction::warning(
            WarningKind::InvalidAssetPath,
            "../secret.png"
        )]
    );
}

#[test]
fn test_directory_is_not_an_image() {
    let dir = image_dir();
    fs::create_dir_all(dir.path().join("charts")).unwrap();

    let instructions = render_markdown("![x](./images/charts)", &options_for(dir.path()));
    assert_eq!(instructions, vec![RenderInstruction::missing_asset("charts")]);
}

#[test]
fn test_malformed_image_line() {
    let instructions = render_markdown("![broken image", &RenderOptions::default());
    assert_eq!(
        instructions,
        vec![RenderInstruction::warning(
            WarningKind::MalformedImageLine,
            "![broken image"
        )]
    );
}

#[test]
fn test_keep_blank_lines() {
    let dir = image_dir();
    let options = options_for(dir.path()).with_blank_lines(true);
    let instructions = render_markdown("a\n\n![x](./images/x.png)", &options);

    assert_eq!(
        instructions,
        vec![
            RenderInstruction::text("a"),
            RenderInstruction::text(""),
            RenderInstruction::missing_asset("x.png"),
        ]
    );
}

#[test]
fn test_renderer_is_lazy() {
    let dir = image_dir();
    let options = options_for(dir.path());
    let mut renderer = ReportRenderer::new(SCENARIO, &options);

    assert!(renderer.next().unwrap().is_text());
    assert_eq!(renderer.stats().section_count, 1);
    assert!(!renderer.is_done());

    let rest: Vec<_> = renderer.by_ref().collect();
    assert_eq!(rest.len(), 2);
    assert!(renderer.is_done());
    assert_eq!(renderer.stats().warning_count, 1);
}

#[test]
fn test_report_file_missing() {
    let instructions = render_report_file("/no/such/report.md", &RenderOptions::default());

    assert_eq!(instructions.len(), 1);
    assert!(instructions[0].is_error());
}

#[test]
fn test_report_file_rereads_on_each_render() {
    let dir = image_dir();
    let report = dir.path().join("report.md");
    let options = options_for(dir.path());

    fs::write(&report, "first").unwrap();
    assert_eq!(
        render_report_file(&report, &options),
        vec![RenderInstruction::text("first")]
    );

    fs::write(&report, "second").unwrap();
    assert_eq!(
        render_report_file(&report, &options),
        vec![RenderInstruction::text("second")]
    );
}
