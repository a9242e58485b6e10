//! Lasso selection listing and export.

use egui::Ui;

use super::panel_trait::{Panel, PanelState};
use super::scatter_ui::ScatterPanel;
use crate::data::export;

#[derive(Default)]
pub struct SelectionPanel {
    state: PanelState,
    last_error: Option<String>,
}

impl Panel for SelectionPanel {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, scatter: &mut ScatterPanel) {
        let selected = scatter.lasso().selected().to_vec();
        ui.label(format!("{} points selected", selected.len()));

        ui.horizontal(|ui| {
            let export_btn = ui.add_enabled(
                !selected.is_empty(),
                egui::Button::new(format!("{} Export…", egui_phosphor::regular::FLOPPY_DISK)),
            );
            if export_btn.clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("selection.json")
                    .add_filter("JSON", &["json"])
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    self.last_error = match export::save_selection(&path, scatter.points(), &selected) {
                        Ok(()) => None,
                        Err(e) => {
                            log::error!("Failed to export selection: {e}");
                            Some(e.to_string())
                        }
                    };
                }
            }
            if ui.button("Clear").clicked() {
                scatter.lasso_mut().clear_selection();
            }
        });
        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }

        ui.separator();
        let mut jump = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for &i in &selected {
                let Some(p) = scatter.points().get(i) else {
                    continue;
                };
                let label = format!("{}  ({:.3}, {:.3})", p.key, p.x, p.y);
                let is_current = scatter.navigator().selected_index() == Some(i);
                if ui.selectable_label(is_current, label).clicked() {
                    jump = Some(i);
                }
            }
        });
        if let Some(i) = jump {
            scatter.navigator_mut().select(i);
        }
    }
}
