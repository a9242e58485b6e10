//! Top-level entry point for running the browser as a native window.

use eframe::egui;

use crate::config::BrowserConfig;
use crate::data::points::PointSet;

use super::browser_app::BrowserApp;

/// Launch the browser in a native window. Blocks until the window is closed.
pub fn run_browser(points: PointSet, cfg: BrowserConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let [w, h] = cfg.window_size;
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(w, h)),
        ..Default::default()
    };
    let app = BrowserApp::new(points, cfg);

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
