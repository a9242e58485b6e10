//! Scatter plot hosting the lasso and the point navigator.
//!
//! Each frame the panel draws the points and widget overlays, then
//! translates the plot response into input events:
//! - primary drag: lasso gesture while the lasso is enabled; a press the
//!   lasso ignores pans the plot instead
//! - click: pick the nearest point within the pick radius
//! - arrow keys and navigator hotkeys

use egui::{Color32, PointerButton, Pos2, Stroke, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotResponse, PlotUi, Points, Polygon};

use crate::config::BrowserConfig;
use crate::data::arbiter::GestureArbiter;
use crate::data::hotkeys::{format_button_tooltip, HotkeyAction, NavigatorHotkeys};
use crate::data::input::{Direction, DragRoute};
use crate::data::lasso::LassoSelector;
use crate::data::navigator::{FocusCircle, PointNavigator};
use crate::data::picking::pick_candidates;
use crate::data::points::{DataPoint, PointSet};
use crate::data::viewport::Viewport;

const POINT_COLOR: Color32 = Color32::from_rgba_premultiplied(50, 75, 128, 128);
const MARKER_COLOR: Color32 = Color32::from_rgba_premultiplied(102, 102, 0, 102);
const FOCUS_FILL: Color32 = Color32::from_rgba_premultiplied(76, 76, 0, 76);
const CIRCLE_SEGMENTS: usize = 64;

pub struct ScatterPanel {
    id: String,
    lasso: LassoSelector,
    navigator: PointNavigator,
    hotkeys: NavigatorHotkeys,
    drag_route: DragRoute,
    x_label: String,
    y_label: String,
    /// Drag draws a lasso instead of panning.
    pub lasso_enabled: bool,
    pub show_grid: bool,
}

impl ScatterPanel {
    pub fn new(points: PointSet, cfg: &BrowserConfig) -> Self {
        let arbiter = GestureArbiter::new();
        let lasso = LassoSelector::new(arbiter.clone(), &points, cfg.lasso.clone());
        let navigator =
            PointNavigator::new(points, cfg.navigator.clone()).with_arbiter(arbiter);
        Self {
            id: "pointbrowse_scatter".to_string(),
            lasso,
            navigator,
            hotkeys: cfg.hotkeys.clone(),
            drag_route: DragRoute::Idle,
            x_label: cfg.columns.x.clone(),
            y_label: cfg.columns.y.clone(),
            lasso_enabled: cfg.features.lasso,
            show_grid: cfg.features.grid,
        }
    }

    /// Callback invoked on every confirmed navigator selection.
    pub fn on_select(&mut self, callback: impl FnMut(&PointNavigator, &DataPoint) + 'static) {
        self.navigator.set_callback(callback);
    }

    pub fn lasso(&self) -> &LassoSelector {
        &self.lasso
    }

    pub fn lasso_mut(&mut self) -> &mut LassoSelector {
        &mut self.lasso
    }

    pub fn navigator(&self) -> &PointNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut PointNavigator {
        &mut self.navigator
    }

    pub fn points(&self) -> &PointSet {
        self.navigator.points()
    }

    /// Toolbar row above the plot.
    pub fn render_toolbar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.toggle_value(&mut self.lasso_enabled, "Lasso")
                .on_hover_text("Drag on the plot to select points");
            if ui
                .button(format!("{} Clear", egui_phosphor::regular::BROOM))
                .on_hover_text(format_button_tooltip(
                    "Clear lasso selection",
                    Some(&self.hotkeys.clear_lasso),
                ))
                .clicked()
            {
                self.lasso.clear_selection();
            }
            ui.separator();
            ui.label(format!("Lasso: {} points", self.lasso.selected().len()));
            ui.separator();
            match self.navigator.selected_record() {
                Some(row) => ui.label(format!("Selected: {} ({:.3}, {:.3})", row.key, row.x, row.y)),
                None => ui.weak("Click a point or press an arrow key"),
            };
        });
    }

    pub fn show(&mut self, ui: &mut Ui) -> PlotResponse<()> {
        let pending = self.navigator.take_viewport_change();

        let plot = Plot::new(self.id.as_str())
            .allow_drag(!self.lasso_enabled)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(true)
            .show_grid(self.show_grid)
            .x_axis_label(self.x_label.clone())
            .y_axis_label(self.y_label.clone());

        let lasso = &self.lasso;
        let navigator = &self.navigator;
        let pan_with_drag = self.drag_route.pans_plot();
        let response = plot.show(ui, |plot_ui| {
            if let Some(vp) = pending {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(vp.min(), vp.max()));
            }
            if pan_with_drag && plot_ui.response().dragged_by(PointerButton::Primary) {
                let delta = plot_ui.pointer_coordinate_drag_delta();
                plot_ui.translate_bounds(-delta);
            }
            draw_points(plot_ui, navigator.points());
            draw_lasso(plot_ui, lasso);
            if let Some(circle) = navigator.focus_circle() {
                draw_focus_circle(plot_ui, circle);
            }
            if let Some(xy) = navigator.highlight() {
                plot_ui.points(
                    Points::new("Selected", vec![xy])
                        .radius(6.0)
                        .filled(true)
                        .color(MARKER_COLOR),
                );
            }
        });

        let bounds = response.transform.bounds();
        self.navigator
            .set_viewport(Viewport::from_min_max(bounds.min(), bounds.max()));

        self.handle_lasso(ui, &response);
        self.handle_pick(&response);
        self.handle_keys(ui);

        if self.navigator.take_redraw_request() || self.navigator.has_viewport_change() {
            ui.ctx().request_repaint();
        }
        response
    }

    fn handle_lasso(&mut self, ui: &Ui, response: &PlotResponse<()>) {
        if !self.lasso_enabled {
            if self.lasso.is_drawing() {
                self.lasso.cancel_gesture();
            }
            self.drag_route = DragRoute::Idle;
            return;
        }
        let resp = &response.response;
        let to_data = |pos: Pos2| plot_coordinate(response, pos);
        if resp.drag_started_by(PointerButton::Primary) {
            let origin = ui.input(|i| i.pointer.press_origin());
            let pressed = self.lasso.on_pointer_down(origin.and_then(to_data));
            self.drag_route = DragRoute::on_press(pressed);
        }
        match self.drag_route {
            DragRoute::Widget => {
                if resp.dragged_by(PointerButton::Primary) {
                    self.lasso
                        .on_pointer_move(resp.interact_pointer_pos().and_then(to_data));
                    ui.ctx().request_repaint();
                }
                if resp.drag_stopped_by(PointerButton::Primary) {
                    self.lasso
                        .on_pointer_up(resp.interact_pointer_pos().and_then(to_data));
                    self.drag_route = DragRoute::Idle;
                }
            }
            DragRoute::Plot => {
                if resp.drag_stopped_by(PointerButton::Primary) {
                    self.drag_route = DragRoute::Idle;
                }
            }
            DragRoute::Idle => {}
        }
    }

    fn handle_pick(&mut self, response: &PlotResponse<()>) {
        if !response.response.clicked() {
            return;
        }
        let Some(pos) = response.response.interact_pointer_pos() else {
            return;
        };
        let transform = &response.transform;
        let xys = self.navigator.points().xys();
        let candidates = pick_candidates(&xys, pos, self.navigator.settings().pick_radius, |p| {
            transform.position_from_point(&PlotPoint::new(p[0], p[1]))
        });
        self.navigator.on_pick(&candidates, plot_coordinate(response, pos));
    }

    fn handle_keys(&mut self, ui: &Ui) {
        let (arrows, actions) = ui.input(|i| {
            let arrows: Vec<(egui::Key, Direction)> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Direction::from_key(*key).map(|d| (*key, d)),
                    _ => None,
                })
                .collect();
            (arrows, self.hotkeys.pressed_actions(i))
        });
        for (key, direction) in arrows {
            // Unhandled arrows stay in the queue for other widgets.
            if self.navigator.on_key(direction).is_handled() {
                ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key));
            }
        }
        for action in actions {
            match action {
                HotkeyAction::ClearLasso => self.lasso.clear_selection(),
                other => {
                    self.navigator.on_hotkey(other);
                }
            }
        }
    }
}

/// Data coordinate under `pos`, `None` outside the plot frame.
fn plot_coordinate(response: &PlotResponse<()>, pos: Pos2) -> Option<[f64; 2]> {
    if !response.transform.frame().contains(pos) {
        return None;
    }
    let p = response.transform.value_from_position(pos);
    Some([p.x, p.y])
}

fn draw_points(plot_ui: &mut PlotUi, points: &PointSet) {
    plot_ui.points(
        Points::new("Points", points.xys())
            .radius(3.0)
            .filled(true)
            .color(POINT_COLOR),
    );
}

fn draw_lasso(plot_ui: &mut PlotUi, lasso: &LassoSelector) {
    // One series per distinct facecolor; transparent points are skipped.
    let mut groups: Vec<(Color32, Vec<[f64; 2]>)> = Vec::new();
    for (&p, &c) in lasso.points().iter().zip(lasso.facecolors()) {
        if c.a() == 0 {
            continue;
        }
        match groups.iter_mut().find(|(gc, _)| *gc == c) {
            Some((_, pts)) => pts.push(p),
            None => groups.push((c, vec![p])),
        }
    }
    let radius = lasso.style().radius;
    for (color, pts) in groups {
        plot_ui.points(Points::new("Lasso", pts).radius(radius).filled(true).color(color));
    }

    let verts = lasso.gesture_vertices();
    if verts.len() > 1 {
        plot_ui.line(
            Line::new("Lasso outline", verts.to_vec()).color(lasso.style().outline_color()),
        );
    }
}

fn draw_focus_circle(plot_ui: &mut PlotUi, circle: FocusCircle) {
    let [cx, cy] = circle.center;
    let pts: Vec<[f64; 2]> = (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            [cx + circle.radius * t.cos(), cy + circle.radius * t.sin()]
        })
        .collect();
    plot_ui.polygon(
        Polygon::new("Focus", pts)
            .fill_color(FOCUS_FILL)
            .stroke(Stroke::new(1.0, Color32::YELLOW)),
    );
}
