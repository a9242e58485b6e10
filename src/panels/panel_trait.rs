use egui::Ui;

use super::scatter_ui::ScatterPanel;

#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    pub visible: bool,
}

/// A side panel reading from (and possibly acting on) the scatter plot.
pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn render_panel(&mut self, _ui: &mut Ui, _scatter: &mut ScatterPanel) {}
}
