//! Dashboard views and menus.
//!
//! A [`Menu`] holds the views of one dashboard variant in display order.
//! Each [`View`] is a pure function of the [`DashboardConfig`]: it reads
//! whatever files it needs and returns instructions. Failures never escape
//! a view; they turn into `Error` or `Warning` instructions in place.
//!
//! # Example
//!
//! ```no_run
//! use reportdeck::dashboard::Menu;
//! use reportdeck::{DashboardConfig, Variant};
//!
//! let config = DashboardConfig::new("/srv/olist").with_variant(Variant::Integrated);
//! let menu = Menu::for_variant(config.variant);
//!
//! for view in menu.views() {
//!     let instructions = view.render(&config);
//!     println!("{}: {} instructions", view.title(), instructions.len());
//! }
//! ```

mod integrated;
mod overview;
mod period;

pub use period::AnalysisPeriod;

use std::sync::Arc;

use crate::config::{DashboardConfig, Variant};
use crate::error::{Error, Result};
use crate::model::{Document, Sidebar};
use crate::render::{RenderInstruction, Resolution, WarningKind};

/// One selectable page of a dashboard.
pub trait View: Send + Sync {
    /// Stable key, e.g. `"report"`.
    fn key(&self) -> &str;

    /// Menu label.
    fn title(&self) -> &str;

    /// Build the page.
    fn render(&self, config: &DashboardConfig) -> Vec<RenderInstruction>;
}

/// A view backed by a plain function.
pub struct FnView {
    key: &'static str,
    title: &'static str,
    render: fn(&DashboardConfig) -> Vec<RenderInstruction>,
}

impl FnView {
    /// Create a view from a render function.
    pub fn new(
        key: &'static str,
        title: &'static str,
        render: fn(&DashboardConfig) -> Vec<RenderInstruction>,
    ) -> Self {
        Self { key, title, render }
    }
}

impl View for FnView {
    fn key(&self) -> &str {
        self.key
    }

    fn title(&self) -> &str {
        self.title
    }

    fn render(&self, config: &DashboardConfig) -> Vec<RenderInstruction> {
        (self.render)(config)
    }
}

/// Ordered views of one dashboard plus its sidebar chrome.
pub struct Menu {
    views: Vec<Arc<dyn View>>,
    sidebar: Sidebar,
}

impl Menu {
    /// Create an empty menu.
    pub fn new(sidebar: Sidebar) -> Self {
        Self {
            views: Vec::new(),
            sidebar,
        }
    }

    /// The built-in menu for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Integrated => integrated::menu(),
            Variant::Overview => overview::menu(),
        }
    }

    /// Append a view. A view with an existing key replaces the old one in place.
    pub fn register(&mut self, view: Arc<dyn View>) {
        if let Some(slot) = self.views.iter_mut().find(|v| v.key() == view.key()) {
            *slot = view;
        } else {
            self.views.push(view);
        }
    }

    /// Views in menu order.
    pub fn views(&self) -> &[Arc<dyn View>] {
        &self.views
    }

    /// Sidebar chrome.
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Menu labels in order.
    pub fn titles(&self) -> Vec<&str> {
        self.views.iter().map(|v| v.title()).collect()
    }

    /// Look up a view by key.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn View>> {
        self.views.iter().find(|v| v.key() == key)
    }

    /// Number of views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Check if the menu has no views.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Render the view with the given key.
    pub fn render(&self, key: &str, config: &DashboardConfig) -> Result<Vec<RenderInstruction>> {
        let view = self
            .get(key)
            .ok_or_else(|| Error::UnknownView(key.to_string()))?;
        log::debug!("Rendering view '{}'", view.key());
        Ok(view.render(config))
    }
}

/// An image under the image directory, or a warning in its place.
pub(crate) fn asset_image(
    config: &DashboardConfig,
    relative: &str,
    caption: &str,
    full_width: bool,
) -> RenderInstruction {
    match config.resolver().resolve_relative(relative) {
        Resolution::Found(path) => RenderInstruction::Image {
            path,
            caption: Some(caption.to_string()),
            full_width,
        },
        Resolution::Missing { remainder, .. } => RenderInstruction::missing_asset(remainder),
        Resolution::Invalid { remainder } => {
            RenderInstruction::warning(WarningKind::InvalidAssetPath, remainder)
        }
    }
}

/// Load a report from the report directory, or the error shown instead.
pub(crate) fn load_report(
    config: &DashboardConfig,
    file_name: &str,
    missing_message: &str,
) -> std::result::Result<Document, RenderInstruction> {
    match Document::from_file(config.report_path(file_name)) {
        Ok(document) => Ok(document),
        Err(Error::ReportNotFound(path)) => {
            log::warn!("Report not found: {}", path.display());
            Err(RenderInstruction::error(missing_message))
        }
        Err(e) => Err(RenderInstruction::error(e.to_string())),
    }
}

/// Format an integer with thousands separators.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_view(_: &DashboardConfig) -> Vec<RenderInstruction> {
        Vec::new()
    }

    #[test]
    fn test_menu_register_and_lookup() {
        let mut menu = Menu::new(Sidebar::default());
        menu.register(Arc::new(FnView::new("a", "First", empty_view)));
        menu.register(Arc::new(FnView::new("b", "Second", empty_view)));
        menu.register(Arc::new(FnView::new("a", "Replaced", empty_view)));

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.titles(), vec!["Replaced", "Second"]);
        assert!(menu.get("b").is_some());
        assert!(menu.get("c").is_none());
    }

    #[test]
    fn test_menu_unknown_view() {
        let menu = Menu::for_variant(Variant::Integrated);
        let result = menu.render("nope", &DashboardConfig::default());
        assert!(matches!(result, Err(Error::UnknownView(_))));
    }

    #[test]
    fn test_builtin_menus() {
        let integrated = Menu::for_variant(Variant::Integrated);
        let keys: Vec<&str> = integrated.views().iter().map(|v| v.key()).collect();
        assert_eq!(keys, vec!["report", "journey", "reorder", "data", "insights"]);

        let overview = Menu::for_variant(Variant::Overview);
        let keys: Vec<&str> = overview.views().iter().map(|v| v.key()).collect();
        assert_eq!(keys, vec!["home", "categories", "prices", "attributes"]);
        assert!(overview.sidebar().info.is_some());
    }

    #[test]
    fn test_asset_image_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::new(dir.path());

        let instruction = asset_image(&config, "journey/stage1_info_impact.png", "x", false);
        assert_eq!(
            instruction,
            RenderInstruction::missing_asset("journey/stage1_info_impact.png")
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1744000), "1,744,000");
    }
}
