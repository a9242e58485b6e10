use pointbrowse::data::polygon::{contains, indices_inside, points_inside};

fn square() -> Vec<[f64; 2]> {
    vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]
}

#[test]
fn interior_and_exterior_points() {
    let sq = square();
    assert!(contains(&sq, [1.0, 1.0]));
    assert!(contains(&sq, [0.1, 1.9]));
    assert!(!contains(&sq, [2.5, 1.0]));
    assert!(!contains(&sq, [-0.1, 1.0]));
    assert!(!contains(&sq, [1.0, 3.0]));
}

#[test]
fn concave_polygon_excludes_notch() {
    // U shape: notch between x=1..2 above y=1
    let u = vec![
        [0.0, 0.0],
        [3.0, 0.0],
        [3.0, 3.0],
        [2.0, 3.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 3.0],
        [0.0, 3.0],
    ];
    assert!(contains(&u, [0.5, 2.5]));
    assert!(contains(&u, [2.5, 2.5]));
    assert!(!contains(&u, [1.5, 2.0]));
    assert!(contains(&u, [1.5, 0.5]));
}

#[test]
fn degenerate_polygons_contain_nothing() {
    assert!(!contains(&[], [0.0, 0.0]));
    assert!(!contains(&[[0.0, 0.0], [1.0, 1.0]], [0.5, 0.5]));
    assert_eq!(points_inside(&[], &[[0.0, 0.0], [1.0, 1.0]]), vec![false, false]);
}

#[test]
fn indices_are_ascending() {
    let pts = [[1.0, 1.0], [5.0, 5.0], [0.5, 1.5], [3.0, 0.5]];
    assert_eq!(indices_inside(&square(), &pts), vec![0, 2]);
}
