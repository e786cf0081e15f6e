//! Benchmarks for report rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reportdeck::render::{render_markdown, to_markdown, RenderOptions};

/// Creates a synthetic report with the given number of sections.
///
/// Every third section embeds an image link, the rest carry a small table.
fn create_test_report(sections: usize) -> String {
    let mut report = String::from("# Integrated Analysis Report\n");

    for i in 0..sections {
        report.push_str("---\n");
        report.push_str(&format!("## Section {}\n\n", i + 1));
        if i % 3 == 0 {
            report.push_str(&format!(
                "Chart for section {}.\n\n![chart {}](./images/charts/chart_{}.png)\n\nNotes below.\n",
                i + 1,
                i + 1,
                i
            ));
        } else {
            report.push_str("| Category | Revenue | Share |\n");
            report.push_str("| :-- | --: | --: |\n");
            report.push_str("| bed_bath_table | 1,744,000 | 8.5% |\n");
            report.push_str("| health_beauty | 1,662,960 | 8.1% |\n");
        }
    }

    report
}

/// Benchmark rendering at various document sizes.
fn bench_report_rendering(c: &mut Criterion) {
    let dir = std::env::temp_dir().join("reportdeck-bench-images");
    let options = RenderOptions::new().with_image_dir(&dir);
    let mut group = c.benchmark_group("report_rendering");

    for sections in [10, 100, 1000].iter() {
        let report = create_test_report(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| render_markdown(black_box(&report), &options));
        });
    }

    group.finish();
}

/// Benchmark Markdown export of a rendered report.
fn bench_markdown_export(c: &mut Criterion) {
    let report = create_test_report(100);
    let instructions = render_markdown(&report, &RenderOptions::default());

    c.bench_function("markdown_export", |b| {
        b.iter(|| to_markdown(black_box(&instructions)));
    });
}

criterion_group!(benches, bench_report_rendering, bench_markdown_export);
criterion_main!(benches);
