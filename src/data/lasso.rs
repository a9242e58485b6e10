//! Lasso selection over a fixed set of points.
//!
//! A gesture starts on pointer-down inside the plot, collects vertices while
//! the pointer moves and ends on pointer-up. Completing a gesture replaces the
//! selection with every point inside the polygon and recolors the facecolor
//! buffer: selected points get the highlight color, the rest the base color.

use egui::Color32;
use serde::{Deserialize, Serialize};

use super::arbiter::{GestureArbiter, OwnerId};
use super::input::EventResponse;
use super::points::PointSet;
use super::polygon;

/// Colors of the lasso overlay, as unmultiplied RGBA.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LassoStyle {
    pub highlight: [u8; 4],
    pub base: [u8; 4],
    pub outline: [u8; 4],
    /// Marker radius in points.
    pub radius: f32,
}

impl Default for LassoStyle {
    fn default() -> Self {
        Self {
            highlight: [255, 255, 0, 255],
            base: [0, 128, 0, 0],
            outline: [200, 200, 200, 255],
            radius: 6.0,
        }
    }
}

impl LassoStyle {
    pub fn highlight_color(&self) -> Color32 {
        rgba(self.highlight)
    }

    pub fn base_color(&self) -> Color32 {
        rgba(self.base)
    }

    pub fn outline_color(&self) -> Color32 {
        rgba(self.outline)
    }
}

fn rgba([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub struct LassoSelector {
    arbiter: GestureArbiter,
    owner: OwnerId,
    style: LassoStyle,
    xys: Vec<[f64; 2]>,
    keys: Vec<String>,
    facecolors: Vec<Color32>,
    /// Vertices of the gesture in progress.
    gesture: Option<Vec<[f64; 2]>>,
    selected: Vec<usize>,
}

impl LassoSelector {
    pub fn new(arbiter: GestureArbiter, points: &PointSet, style: LassoStyle) -> Self {
        let owner = arbiter.register();
        let base = style.base_color();
        Self {
            arbiter,
            owner,
            xys: points.xys(),
            keys: points.keys().map(str::to_string).collect(),
            facecolors: vec![base; points.len()],
            style,
            gesture: None,
            selected: Vec::new(),
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn style(&self) -> &LassoStyle {
        &self.style
    }

    /// Start a gesture at `start`; `None` means the pointer is outside the plot.
    pub fn begin_gesture(&mut self, start: Option<[f64; 2]>) -> EventResponse {
        if self.arbiter.is_locked() {
            return EventResponse::Ignored;
        }
        let Some(start) = start else {
            return EventResponse::Ignored;
        };
        if !self.arbiter.try_acquire(self.owner) {
            return EventResponse::Ignored;
        }
        self.gesture = Some(vec![start]);
        EventResponse::Handled
    }

    /// Select the points inside `vertices` and release the lock.
    pub fn complete_gesture(&mut self, vertices: &[[f64; 2]]) -> &[usize] {
        self.gesture = None;
        let selected = polygon::indices_inside(vertices, &self.xys);
        let base = self.style.base_color();
        let highlight = self.style.highlight_color();
        self.facecolors.fill(base);
        for &i in &selected {
            self.facecolors[i] = highlight;
        }
        self.arbiter.release(self.owner);
        log::info!(
            "lasso selected {} of {} points: {:?}",
            selected.len(),
            self.xys.len(),
            selected.iter().map(|&i| self.keys[i].as_str()).collect::<Vec<_>>()
        );
        self.selected = selected;
        &self.selected
    }

    /// Drop the gesture in progress and release the lock if this lasso holds
    /// it. The selection is left untouched.
    pub fn cancel_gesture(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("lasso gesture cancelled");
        }
        self.arbiter.release(self.owner);
    }

    pub fn on_pointer_down(&mut self, pos: Option<[f64; 2]>) -> EventResponse {
        self.begin_gesture(pos)
    }

    pub fn on_pointer_move(&mut self, pos: Option<[f64; 2]>) -> EventResponse {
        match (self.gesture.as_mut(), pos) {
            (Some(verts), Some(p)) => {
                if verts.last() != Some(&p) {
                    verts.push(p);
                }
                EventResponse::Handled
            }
            _ => EventResponse::Ignored,
        }
    }

    /// Finish the gesture. A release that has not traced at least a triangle
    /// is a click rather than a lasso and cancels.
    pub fn on_pointer_up(&mut self, pos: Option<[f64; 2]>) -> EventResponse {
        let Some(mut verts) = self.gesture.take() else {
            self.cancel_gesture();
            return EventResponse::Ignored;
        };
        if let Some(p) = pos {
            if verts.last() != Some(&p) {
                verts.push(p);
            }
        }
        if verts.len() > 2 {
            self.complete_gesture(&verts);
        } else {
            self.cancel_gesture();
        }
        EventResponse::Handled
    }

    /// Reset to an empty selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.facecolors.fill(self.style.base_color());
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn gesture_vertices(&self) -> &[[f64; 2]] {
        self.gesture.as_deref().unwrap_or(&[])
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn selected_keys(&self) -> Vec<&str> {
        self.selected.iter().map(|&i| self.keys[i].as_str()).collect()
    }

    pub fn facecolors(&self) -> &[Color32] {
        &self.facecolors
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.xys
    }
}
