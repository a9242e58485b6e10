//! Standalone application wrapper.
//!
//! [`BrowserApp`] owns the [`ScatterPanel`] and the side panels and implements
//! [`eframe::App`] so the browser can run as a native window.

use eframe::egui;

use crate::config::BrowserConfig;
use crate::data::points::{ColumnConfig, PointSet};
use crate::panels::{Panel, RecordPanel, ScatterPanel, SelectionPanel};

pub struct BrowserApp {
    pub scatter: ScatterPanel,
    pub panels: Vec<Box<dyn Panel>>,
    config: BrowserConfig,
    status: Option<String>,
}

impl BrowserApp {
    pub fn new(points: PointSet, config: BrowserConfig) -> Self {
        let mut scatter = ScatterPanel::new(points, &config);
        let record = RecordPanel::default();
        let history = record.history();
        scatter.on_select(move |_nav, row| {
            log::info!("selected '{}' at ({}, {})", row.key, row.x, row.y);
            RecordPanel::push_history(&history, &row.key);
        });

        let mut record: Box<dyn Panel> = Box::new(record);
        record.state_mut().visible = config.features.record_panel;
        let selection: Box<dyn Panel> = Box::new(SelectionPanel::default());

        Self {
            scatter,
            panels: vec![record, selection],
            config,
            status: None,
        }
    }

    /// Replace the displayed points, keeping the configuration.
    pub fn load_points(&mut self, points: PointSet) {
        log::info!("loaded {} points", points.len());
        *self = Self::new(points, self.config.clone());
    }

    fn open_file_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        let columns: &ColumnConfig = &self.config.columns;
        match PointSet::load_json_file(&path, columns) {
            Ok(points) => self.load_points(points),
            Err(e) => {
                log::error!("Failed to load {:?}: {e}", path);
                self.status = Some(e.to_string());
            }
        }
    }

    fn render_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("pointbrowse_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Open…", egui_phosphor::regular::FOLDER_OPEN))
                    .clicked()
                {
                    self.open_file_dialog();
                }
                if ui.button("Save settings").clicked() {
                    self.status = match self.config.save_to_default_path() {
                        Ok(()) => None,
                        Err(e) => {
                            log::error!("Failed to save settings: {e}");
                            Some(e.to_string())
                        }
                    };
                }
                ui.separator();
                for panel in self.panels.iter_mut() {
                    let name = panel.name();
                    ui.toggle_value(&mut panel.state_mut().visible, name);
                }
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, status);
                }
            });
            self.scatter.render_toolbar(ui);
        });
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu(ctx);

        if self.panels.iter().any(|p| p.state().visible) {
            egui::SidePanel::right("pointbrowse_side")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    for panel in self.panels.iter_mut().filter(|p| p.state().visible) {
                        ui.collapsing(panel.name(), |ui| {
                            panel.render_panel(ui, &mut self.scatter);
                        });
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.scatter.show(ui);
        });
    }
}
