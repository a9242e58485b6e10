//! Pick candidates: points within a screen-space tolerance of the cursor.

use egui::Pos2;

/// Ascending indices of `points` whose screen position lies within
/// `radius` of `cursor`. `to_screen` maps data to screen coordinates.
pub fn pick_candidates(
    points: &[[f64; 2]],
    cursor: Pos2,
    radius: f32,
    to_screen: impl Fn([f64; 2]) -> Pos2,
) -> Vec<usize> {
    let r2 = radius * radius;
    points
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| {
            let d = to_screen(p) - cursor;
            (d.length_sq() <= r2).then_some(i)
        })
        .collect()
}
