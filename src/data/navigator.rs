//! Single-point browsing: pick a point with the mouse or step with the keys.
//!
//! The navigator holds a current index into an ordered [`PointSet`]. Every
//! confirmed selection change moves the highlight marker, pans the viewport
//! so the point stays clear of the edges and invokes the user callback with
//! the selected row.
//!
//! Arrow keys drive a floating focus circle once a point is selected; moving
//! the circle is exploration only and never confirms a new selection.

use serde::{Deserialize, Serialize};

use super::arbiter::{GestureArbiter, OwnerId};
use super::hotkeys::HotkeyAction;
use super::input::{Direction, EventResponse};
use super::points::{DataPoint, PointSet};
use super::viewport::{PanPolicy, Viewport};

/// Called with the navigator and the newly selected row.
pub type SelectCallback = Box<dyn FnMut(&PointNavigator, &DataPoint)>;

/// Tunables of the navigator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Pick tolerance around the cursor, in screen points.
    pub pick_radius: f32,
    /// Distance the focus circle moves per key press, in data units.
    pub focus_step: f64,
    /// Radius of the focus circle, in data units.
    pub focus_radius: f64,
    pub pan: PanPolicy,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            pick_radius: 5.0,
            focus_step: 0.1,
            focus_radius: 0.25,
            pan: PanPolicy::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    NoSelection,
    PointSelected,
    CircleNavigating,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusCircle {
    pub center: [f64; 2],
    pub radius: f64,
}

fn log_row(_nav: &PointNavigator, row: &DataPoint) {
    log::info!(
        "selected '{}' at ({}, {}): {}",
        row.key,
        row.x,
        row.y,
        serde_json::Value::Object(row.fields.clone())
    );
}

pub struct PointNavigator {
    points: PointSet,
    settings: NavigatorSettings,
    index: usize,
    selected: Option<usize>,
    highlight: Option<[f64; 2]>,
    focus_circle: Option<FocusCircle>,
    viewport: Viewport,
    viewport_changed: bool,
    redraw_requested: bool,
    arbiter: Option<(GestureArbiter, OwnerId)>,
    callback: Option<SelectCallback>,
}

impl PointNavigator {
    pub fn new(points: PointSet, settings: NavigatorSettings) -> Self {
        Self {
            points,
            settings,
            index: 0,
            selected: None,
            highlight: None,
            focus_circle: None,
            viewport: Viewport::default(),
            viewport_changed: false,
            redraw_requested: false,
            arbiter: None,
            callback: Some(Box::new(log_row)),
        }
    }

    /// Ignore picks while another widget owns the pointer.
    pub fn with_arbiter(mut self, arbiter: GestureArbiter) -> Self {
        let owner = arbiter.register();
        self.arbiter = Some((arbiter, owner));
        self
    }

    pub fn with_callback(
        mut self,
        callback: impl FnMut(&PointNavigator, &DataPoint) + 'static,
    ) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: impl FnMut(&PointNavigator, &DataPoint) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn state(&self) -> NavState {
        match (self.selected, self.focus_circle) {
            (None, _) => NavState::NoSelection,
            (Some(_), None) => NavState::PointSelected,
            (Some(_), Some(_)) => NavState::CircleNavigating,
        }
    }

    /// Select the candidate nearest to `cursor`.
    ///
    /// `candidates` are indices reported by the picking mechanism; indices out
    /// of range are discarded. Ties go to the lowest index.
    pub fn on_pick(&mut self, candidates: &[usize], cursor: Option<[f64; 2]>) -> EventResponse {
        if let Some((arbiter, owner)) = &self.arbiter {
            if !arbiter.is_available_to(*owner) {
                return EventResponse::Ignored;
            }
        }
        let Some([cx, cy]) = cursor else {
            return EventResponse::Ignored;
        };
        let nearest = candidates
            .iter()
            .filter_map(|&i| self.points.get(i).map(|p| (i, (cx - p.x).hypot(cy - p.y))))
            .min_by(|(ia, da), (ib, db)| da.total_cmp(db).then(ia.cmp(ib)));
        let Some((index, _)) = nearest else {
            return EventResponse::Ignored;
        };
        // A confirmed pick starts keyboard exploration afresh from this point.
        self.focus_circle = None;
        self.index = index;
        self.update();
        EventResponse::Handled
    }

    pub fn on_key(&mut self, direction: Direction) -> EventResponse {
        if self.points.is_empty() {
            return EventResponse::Ignored;
        }
        let Some(current) = self.selected_record().map(DataPoint::xy) else {
            self.advance(1);
            return EventResponse::Handled;
        };
        let (dx, dy) = direction.offset();
        if let Some(circle) = self.focus_circle.as_mut() {
            circle.center[0] += dx * self.settings.focus_step;
            circle.center[1] += dy * self.settings.focus_step;
        } else {
            self.focus_circle = Some(FocusCircle {
                center: current,
                radius: self.settings.focus_radius,
            });
            log::debug!("focus circle created at {current:?}");
        }
        self.redraw_requested = true;
        EventResponse::Handled
    }

    pub fn on_hotkey(&mut self, action: HotkeyAction) -> EventResponse {
        match action {
            HotkeyAction::NextPoint => self.advance(1),
            HotkeyAction::PrevPoint => self.advance(-1),
            HotkeyAction::ClearFocus => {
                if self.focus_circle.take().is_none() {
                    return EventResponse::Ignored;
                }
                self.redraw_requested = true;
                EventResponse::Handled
            }
            HotkeyAction::ClearLasso => EventResponse::Ignored,
        }
    }

    /// Step `delta` points along the collection, wrapping at both ends.
    pub fn advance(&mut self, delta: isize) -> EventResponse {
        let len = self.points.len();
        if len == 0 {
            return EventResponse::Ignored;
        }
        let step = delta.rem_euclid(len as isize) as usize;
        self.index = (self.index + step) % len;
        self.update();
        EventResponse::Handled
    }

    /// Select the point at `index` directly.
    pub fn select(&mut self, index: usize) -> EventResponse {
        if index >= self.points.len() {
            return EventResponse::Ignored;
        }
        self.index = index;
        self.update();
        EventResponse::Handled
    }

    /// Confirm the current index: move the marker, pan, notify.
    pub fn update(&mut self) {
        let Some(row) = self.points.get(self.index) else {
            return;
        };
        let xy = row.xy();
        self.selected = Some(self.index);
        self.highlight = Some(xy);
        if self.viewport.keep_in_view(xy, &self.settings.pan) {
            self.viewport_changed = true;
        }
        if let Some(mut callback) = self.callback.take() {
            if let Some(row) = self.points.get(self.index) {
                callback(&*self, row);
            }
            self.callback = Some(callback);
        }
        self.redraw_requested = true;
    }

    /// Current plot bounds as reported by the host.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The panned viewport, once per change.
    pub fn take_viewport_change(&mut self) -> Option<Viewport> {
        std::mem::take(&mut self.viewport_changed).then_some(self.viewport)
    }

    pub fn has_viewport_change(&self) -> bool {
        self.viewport_changed
    }

    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&DataPoint> {
        self.selected.and_then(|i| self.points.get(i))
    }

    pub fn highlight(&self) -> Option<[f64; 2]> {
        self.highlight
    }

    pub fn focus_circle(&self) -> Option<FocusCircle> {
        self.focus_circle
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }
}
