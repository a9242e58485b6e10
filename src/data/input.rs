//! Toolkit-independent input vocabulary shared by the widgets.

use serde::{Deserialize, Serialize};

/// Result of feeding an input event to a widget.
///
/// `Ignored` means the event was irrelevant or malformed and the host should
/// fall through to its default handling (pan, zoom, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventResponse {
    Handled,
    Ignored,
}

impl EventResponse {
    pub fn is_handled(self) -> bool {
        self == EventResponse::Handled
    }
}

/// Receiver of the primary-button drag in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragRoute {
    #[default]
    Idle,
    /// The widget accepted the press and consumes the drag.
    Widget,
    /// The widget ignored the press; the drag pans the plot.
    Plot,
}

impl DragRoute {
    pub fn on_press(response: EventResponse) -> Self {
        if response.is_handled() {
            DragRoute::Widget
        } else {
            DragRoute::Plot
        }
    }

    pub fn pans_plot(self) -> bool {
        self == DragRoute::Plot
    }
}

/// Arrow-key direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit offset `(dx, dy)` in data coordinates.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
        }
    }

    pub fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowLeft => Some(Direction::Left),
            egui::Key::ArrowRight => Some(Direction::Right),
            egui::Key::ArrowUp => Some(Direction::Up),
            egui::Key::ArrowDown => Some(Direction::Down),
            _ => None,
        }
    }
}
