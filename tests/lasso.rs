use egui::Color32;
use pointbrowse::{DataPoint, EventResponse, GestureArbiter, LassoSelector, LassoStyle, PointSet};

fn grid_points() -> PointSet {
    // 3x3 grid at integer coordinates 0..=2
    let pts = (0..9)
        .map(|i| DataPoint::new(format!("p{i}"), (i % 3) as f64, (i / 3) as f64))
        .collect();
    PointSet::new(pts).unwrap()
}

fn triangle_around_origin() -> Vec<[f64; 2]> {
    vec![[-0.5, -0.5], [2.0, -0.5], [-0.5, 2.0]]
}

#[test]
fn completed_gesture_selects_enclosed_points() {
    let arbiter = GestureArbiter::new();
    let mut lasso = LassoSelector::new(arbiter.clone(), &grid_points(), LassoStyle::default());

    assert_eq!(lasso.on_pointer_down(Some([-0.5, -0.5])), EventResponse::Handled);
    assert!(arbiter.is_held_by(lasso.owner()));
    lasso.on_pointer_move(Some([2.0, -0.5]));
    lasso.on_pointer_up(Some([-0.5, 2.0]));

    assert_eq!(lasso.selected(), &[0, 1, 3]);
    assert_eq!(lasso.selected_keys(), vec!["p0", "p1", "p3"]);
    assert!(!arbiter.is_locked());
    assert!(!lasso.is_drawing());
}

#[test]
fn facecolors_follow_selection() {
    let style = LassoStyle::default();
    let mut lasso = LassoSelector::new(GestureArbiter::new(), &grid_points(), style.clone());
    assert!(lasso.facecolors().iter().all(|c| *c == style.base_color()));

    lasso.complete_gesture(&triangle_around_origin());
    let colors = lasso.facecolors();
    assert_eq!(colors[0], style.highlight_color());
    assert_eq!(colors[1], style.highlight_color());
    assert_eq!(colors[2], style.base_color());
    assert_eq!(colors[8], style.base_color());
    assert_eq!(style.base_color().a(), 0);
    assert_eq!(style.highlight_color().a(), 255);
}

#[test]
fn new_gesture_replaces_selection_wholesale() {
    let mut lasso = LassoSelector::new(GestureArbiter::new(), &grid_points(), LassoStyle::default());
    lasso.complete_gesture(&triangle_around_origin());
    lasso.complete_gesture(&[[1.5, 1.5], [2.5, 1.5], [2.5, 2.5], [1.5, 2.5]]);
    assert_eq!(lasso.selected(), &[8]);
    assert_eq!(lasso.facecolors()[0], LassoStyle::default().base_color());
}

#[test]
fn degenerate_polygon_yields_empty_selection() {
    let mut lasso = LassoSelector::new(GestureArbiter::new(), &grid_points(), LassoStyle::default());
    lasso.complete_gesture(&triangle_around_origin());
    assert!(lasso.complete_gesture(&[]).is_empty());
    assert!(lasso.complete_gesture(&[[0.0, 0.0], [1.0, 1.0]]).is_empty());
}

#[test]
fn gesture_while_locked_is_ignored() {
    let arbiter = GestureArbiter::new();
    let other = arbiter.register();
    let mut lasso = LassoSelector::new(arbiter.clone(), &grid_points(), LassoStyle::default());
    lasso.complete_gesture(&triangle_around_origin());
    let before = lasso.selected().to_vec();

    assert!(arbiter.try_acquire(other));
    assert_eq!(lasso.on_pointer_down(Some([0.0, 0.0])), EventResponse::Ignored);
    assert!(!lasso.is_drawing());
    assert_eq!(arbiter.owner(), Some(other));

    // A stray release must not steal the other owner's lock either.
    lasso.on_pointer_up(Some([0.0, 0.0]));
    assert_eq!(arbiter.owner(), Some(other));
    assert_eq!(lasso.selected(), before.as_slice());
}

#[test]
fn press_outside_plot_is_ignored() {
    let arbiter = GestureArbiter::new();
    let mut lasso = LassoSelector::new(arbiter.clone(), &grid_points(), LassoStyle::default());
    assert_eq!(lasso.on_pointer_down(None), EventResponse::Ignored);
    assert!(!arbiter.is_locked());
}

#[test]
fn click_without_polygon_cancels_and_keeps_selection() {
    let arbiter = GestureArbiter::new();
    let mut lasso = LassoSelector::new(arbiter.clone(), &grid_points(), LassoStyle::default());
    lasso.complete_gesture(&triangle_around_origin());

    lasso.on_pointer_down(Some([1.0, 1.0]));
    lasso.on_pointer_up(Some([1.0, 1.0]));
    assert_eq!(lasso.selected(), &[0, 1, 3]);
    assert!(!arbiter.is_locked());
}

#[test]
fn cancel_releases_lock_without_touching_selection() {
    let arbiter = GestureArbiter::new();
    let mut lasso = LassoSelector::new(arbiter.clone(), &grid_points(), LassoStyle::default());
    lasso.on_pointer_down(Some([-0.5, -0.5]));
    lasso.on_pointer_move(Some([2.5, -0.5]));
    lasso.cancel_gesture();
    assert!(!arbiter.is_locked());
    assert!(lasso.selected().is_empty());
    assert!(lasso.gesture_vertices().is_empty());
}

#[test]
fn moves_outside_plot_are_not_recorded() {
    let mut lasso = LassoSelector::new(GestureArbiter::new(), &grid_points(), LassoStyle::default());
    lasso.on_pointer_down(Some([0.0, 0.0]));
    assert_eq!(lasso.on_pointer_move(None), EventResponse::Ignored);
    lasso.on_pointer_move(Some([1.0, 0.0]));
    assert_eq!(lasso.gesture_vertices(), &[[0.0, 0.0], [1.0, 0.0]]);
}

#[test]
fn clear_selection_resets_colors() {
    let mut lasso = LassoSelector::new(GestureArbiter::new(), &grid_points(), LassoStyle::default());
    lasso.complete_gesture(&triangle_around_origin());
    lasso.clear_selection();
    assert!(lasso.selected().is_empty());
    assert!(lasso.facecolors().iter().all(|c| *c == Color32::TRANSPARENT));
}
