//! Integrated analysis dashboard: report viewer, journey and retention
//! reports, raw data and an insight summary.

use std::sync::Arc;

use super::{asset_image, load_report, FnView, Menu};
use crate::config::{DashboardConfig, INTEGRATED_REPORT, JOURNEY_REPORT, REORDER_REPORT};
use crate::data::{load_preview, DOWNLOAD_FILE_NAME};
use crate::error::Error;
use crate::model::{Download, Sidebar};
use crate::render::{RenderInstruction, ReportRenderer, Tone};

const PAGE_TITLE: &str = "📊 Olist E-commerce Integrated Analysis Report";

/// Supporting charts for a standalone report, split into two columns.
struct ChartPanel {
    heading: &'static str,
    left: &'static [(&'static str, &'static str)],
    right: &'static [(&'static str, &'static str)],
}

const JOURNEY_CHARTS: ChartPanel = ChartPanel {
    heading: "📊 Key Metrics by Stage",
    left: &[
        ("journey/stage1_info_impact.png", "Information impact"),
        ("journey/stage2_shipping_sensitivity.png", "Shipping fee sensitivity"),
    ],
    right: &[
        ("journey/stage3_delivery_impact.png", "Delivery delay impact"),
        ("journey/stage4_satisfaction_corr.png", "Satisfaction correlation"),
    ],
};

const REORDER_CHARTS: ChartPanel = ChartPanel {
    heading: "📊 Visualisations",
    left: &[
        ("reorder/cohort_retention_heatmap.png", "Cohort retention"),
        ("reorder/interpurchase_interval_dist.png", "Inter-purchase interval"),
    ],
    right: &[("reorder/category_reorder_rate.png", "Reorder rate by category")],
};

pub(super) fn menu() -> Menu {
    let mut menu = Menu::new(Sidebar {
        title: "Analysis Menu".to_string(),
        menu_label: "Go to".to_string(),
        info: None,
        caption: None,
    });
    menu.register(Arc::new(FnView::new("report", "Analysis Report", report)));
    menu.register(Arc::new(FnView::new("journey", "Customer Journey", journey)));
    menu.register(Arc::new(FnView::new("reorder", "Reorder & Retention", reorder)));
    menu.register(Arc::new(FnView::new("data", "Raw Data", data)));
    menu.register(Arc::new(FnView::new("insights", "Insight Summary", insights)));
    menu
}

fn page() -> Vec<RenderInstruction> {
    vec![RenderInstruction::title(PAGE_TITLE), RenderInstruction::Divider]
}

fn report(config: &DashboardConfig) -> Vec<RenderInstruction> {
    let mut out = page();
    match load_report(config, INTEGRATED_REPORT, "Report file not found.") {
        Ok(document) => {
            let options = config.render_options();
            out.extend(ReportRenderer::for_document(&document, &options));
        }
        Err(instruction) => out.push(instruction),
    }
    out
}

fn report_with_charts(
    config: &DashboardConfig,
    file_name: &str,
    missing_message: &str,
    charts: &ChartPanel,
) -> Vec<RenderInstruction> {
    let mut out = page();
    let document = match load_report(config, file_name, missing_message) {
        Ok(document) => document,
        Err(instruction) => {
            out.push(instruction);
            return out;
        }
    };

    out.push(RenderInstruction::text(document.source()));
    out.push(RenderInstruction::subheader(charts.heading));

    let column = |images: &[(&str, &str)]| -> Vec<RenderInstruction> {
        images
            .iter()
            .map(|(path, caption)| asset_image(config, path, caption, false))
            .collect()
    };
    out.push(RenderInstruction::Columns {
        columns: vec![column(charts.left), column(charts.right)],
    });
    out
}

fn journey(config: &DashboardConfig) -> Vec<RenderInstruction> {
    report_with_charts(
        config,
        JOURNEY_REPORT,
        "Customer journey report not found.",
        &JOURNEY_CHARTS,
    )
}

fn reorder(config: &DashboardConfig) -> Vec<RenderInstruction> {
    report_with_charts(
        config,
        REORDER_REPORT,
        "Reorder analysis report not found.",
        &REORDER_CHARTS,
    )
}

fn data(config: &DashboardConfig) -> Vec<RenderInstruction> {
    let mut out = page();
    out.push(RenderInstruction::subheader(format!(
        "📁 Transaction-Level Data (first {} rows)",
        config.preview_rows
    )));

    match load_preview(&config.data_path, config.preview_rows) {
        Ok(table) => {
            out.push(RenderInstruction::data_grid(table));
            out.push(RenderInstruction::Download {
                download: Download::csv(
                    "Download CSV",
                    DOWNLOAD_FILE_NAME,
                    config.data_path.clone(),
                ),
            });
        }
        Err(Error::DataNotFound(path)) => {
            log::warn!("Data file not found: {}", path.display());
            out.push(RenderInstruction::error("Data file not found."));
        }
        Err(e) => out.push(RenderInstruction::error(e.to_string())),
    }
    out
}

fn insights(_config: &DashboardConfig) -> Vec<RenderInstruction> {
    let mut out = page();
    out.push(RenderInstruction::subheader("💡 Key Business Insights"));
    out.push(RenderInstruction::Columns {
        columns: vec![
            vec![
                RenderInstruction::callout(
                    Tone::Info,
                    "**Product & pricing optimisation**\n\n\
                     - Titles around 50 characters with 2-3 photos perform best\n\
                     - Keep the core price point near 100 BRL",
                ),
                RenderInstruction::callout(
                    Tone::Success,
                    "**Quality & satisfaction**\n\n\
                     - Cancellation rate 0.48% (healthy)\n\
                     - Order handling behind 1-star reviews needs attention",
                ),
            ],
            vec![RenderInstruction::callout(
                Tone::Warning,
                "**Retention strategy**\n\n\
                 - Reorder rate: **3.05%** (very low)\n\
                 - Average inter-purchase interval: **112 days**\n\
                 - Loyalty needs CRM-driven marketing",
            )],
        ],
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::WarningKind;
    use std::fs;

    fn workspace() -> (tempfile::TempDir, DashboardConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("report")).unwrap();
        fs::create_dir_all(dir.path().join("images/journey")).unwrap();
        let config = DashboardConfig::new(dir.path());
        (dir, config)
    }

    #[test]
    fn test_every_view_starts_with_page_title() {
        let (_dir, config) = workspace();
        for view in menu().views() {
            let out = view.render(&config);
            assert_eq!(out[0], RenderInstruction::title(PAGE_TITLE), "{}", view.key());
            assert_eq!(out[1], RenderInstruction::Divider);
        }
    }

    #[test]
    fn test_report_missing() {
        let (_dir, config) = workspace();
        let out = report(&config);

        assert_eq!(out.len(), 3);
        assert_eq!(out[2], RenderInstruction::error("Report file not found."));
    }

    #[test]
    fn test_journey_charts() {
        let (dir, config) = workspace();
        fs::write(dir.path().join("report").join(JOURNEY_REPORT), "# Journey\n").unwrap();
        fs::write(
            dir.path().join("images/journey/stage1_info_impact.png"),
            b"\x89PNG\r\n\x1a\n",
        )
        .unwrap();

        let out = journey(&config);
        assert_eq!(out[2], RenderInstruction::text("# Journey\n"));

        let RenderInstruction::Columns { columns } = &out[4] else {
            panic!("expected columns, got {:?}", out[4]);
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].len(), 2);
        assert!(columns[0][0].is_image());
        assert_eq!(
            columns[0][1],
            RenderInstruction::warning(
                WarningKind::MissingAsset,
                "journey/stage2_shipping_sensitivity.png"
            )
        );
    }

    #[test]
    fn test_reorder_missing_report() {
        let (_dir, config) = workspace();
        let out = reorder(&config);

        assert_eq!(
            out.last(),
            Some(&RenderInstruction::error("Reorder analysis report not found."))
        );
        assert!(!out.iter().any(|i| matches!(i, RenderInstruction::Columns { .. })));
    }

    #[test]
    fn test_data_missing_file() {
        let (_dir, config) = workspace();
        let out = data(&config);

        assert_eq!(out.last(), Some(&RenderInstruction::error("Data file not found.")));
        assert_eq!(out.iter().filter(|i| i.is_error()).count(), 1);
        assert!(!out.iter().any(|i| matches!(i, RenderInstruction::Table { .. })));
    }
}
