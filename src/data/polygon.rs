//! Point-in-polygon containment.
//!
//! Even-odd ray casting. A point exactly on an edge may land on either side;
//! callers must not rely on boundary behavior.

pub fn contains(polygon: &[[f64; 2]], point: [f64; 2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let [px, py] = point;
    let mut inside = false;
    let mut prev = polygon[polygon.len() - 1];
    for &cur in polygon {
        let [x1, y1] = prev;
        let [x2, y2] = cur;
        // Edge straddles the horizontal ray through the point.
        if (y2 > py) != (y1 > py) {
            let x_cross = x2 + (py - y2) * (x1 - x2) / (y1 - y2);
            if px < x_cross {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}

/// Axis-aligned extent of `polygon`, `None` if it has no vertices.
fn extent(polygon: &[[f64; 2]]) -> Option<([f64; 2], [f64; 2])> {
    let first = *polygon.first()?;
    Some(polygon.iter().skip(1).fold((first, first), |(lo, hi), p| {
        (
            [lo[0].min(p[0]), lo[1].min(p[1])],
            [hi[0].max(p[0]), hi[1].max(p[1])],
        )
    }))
}

/// Containment mask for every point, in input order.
pub fn points_inside(polygon: &[[f64; 2]], points: &[[f64; 2]]) -> Vec<bool> {
    let Some((lo, hi)) = extent(polygon).filter(|_| polygon.len() >= 3) else {
        return vec![false; points.len()];
    };
    points
        .iter()
        .map(|&p| {
            p[0] >= lo[0] && p[0] <= hi[0] && p[1] >= lo[1] && p[1] <= hi[1] && contains(polygon, p)
        })
        .collect()
}

/// Ascending indices of the points inside `polygon`.
pub fn indices_inside(polygon: &[[f64; 2]], points: &[[f64; 2]]) -> Vec<usize> {
    points_inside(polygon, points)
        .into_iter()
        .enumerate()
        .filter_map(|(i, inside)| inside.then_some(i))
        .collect()
}
