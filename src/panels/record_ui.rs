//! Detail view of the row selected by the navigator.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use egui::Ui;
use egui_plot::{Line, Plot};

use super::panel_trait::{Panel, PanelState};
use super::scatter_ui::ScatterPanel;

const HISTORY_LEN: usize = 20;

/// Keys of recently confirmed selections, newest first.
pub type SelectionHistory = Rc<RefCell<VecDeque<String>>>;

pub struct RecordPanel {
    state: PanelState,
    history: SelectionHistory,
}

impl Default for RecordPanel {
    fn default() -> Self {
        Self {
            state: PanelState { visible: true },
            history: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

impl RecordPanel {
    /// Shared history handle, fed from the navigator callback.
    pub fn history(&self) -> SelectionHistory {
        self.history.clone()
    }

    pub fn push_history(history: &SelectionHistory, key: &str) {
        let mut h = history.borrow_mut();
        h.retain(|k| k != key);
        h.push_front(key.to_string());
        h.truncate(HISTORY_LEN);
    }
}

impl Panel for RecordPanel {
    fn name(&self) -> &'static str {
        "Record"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, scatter: &mut ScatterPanel) {
        let Some(row) = scatter.navigator().selected_record().cloned() else {
            ui.weak("No point selected");
            return;
        };

        ui.heading(&row.key);
        egui::Grid::new("record_fields")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                ui.label("x");
                ui.monospace(format!("{}", row.x));
                ui.end_row();
                ui.label("y");
                ui.monospace(format!("{}", row.y));
                ui.end_row();
                for (name, value) in &row.fields {
                    if value.is_array() {
                        continue;
                    }
                    ui.label(name);
                    ui.monospace(value.to_string());
                    ui.end_row();
                }
            });

        for (name, series) in row.series_fields() {
            ui.separator();
            ui.label(name);
            let pts: Vec<[f64; 2]> = series
                .iter()
                .enumerate()
                .map(|(i, v)| [i as f64, *v])
                .collect();
            Plot::new(format!("record_series_{name}"))
                .height(140.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(name, pts));
                });
        }

        ui.separator();
        ui.label("Recent");
        let mut jump = None;
        for key in self.history.borrow().iter() {
            if ui.selectable_label(*key == row.key, key).clicked() {
                jump = scatter.points().index_of(key);
            }
        }
        if let Some(i) = jump {
            scatter.navigator_mut().select(i);
        }
    }
}
