pub mod panel_trait;
pub mod record_ui;
pub mod scatter_ui;
pub mod selection_ui;

pub use panel_trait::{Panel, PanelState};
pub use record_ui::{RecordPanel, SelectionHistory};
pub use scatter_ui::ScatterPanel;
pub use selection_ui::SelectionPanel;
