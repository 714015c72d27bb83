//! Assertion utilities for page-turn tests

use folio_ui_graphics::{Path, Point};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Whether the closed polygon through `vertices` has no self-intersections.
/// Consecutive duplicate vertices are ignored; edges that merely share an
/// endpoint with a neighbour are fine.
pub fn is_simple_polygon(vertices: &[Point]) -> bool {
    let mut ring: Vec<Point> = Vec::with_capacity(vertices.len());
    for &vertex in vertices {
        if ring.last().map_or(true, |last| last.distance(vertex) > 1e-4) {
            ring.push(vertex);
        }
    }
    while ring.len() > 1 && ring[0].distance(ring[ring.len() - 1]) <= 1e-4 {
        ring.pop();
    }
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let edge = |index: usize| (ring[index], ring[(index + 1) % n]);
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            let (p1, p2) = edge(i);
            let (p3, p4) = edge(j);
            if segments_cross(p1, p2, p3, p4) {
                return false;
            }
        }
    }
    true
}

/// Asserts every contour of `path` is a simple polygon.
pub fn assert_simple_path(path: &Path, msg: &str) {
    let contours = path.flatten(12);
    assert!(!contours.is_empty(), "{}: path has no contours", msg);
    for (index, contour) in contours.iter().enumerate() {
        assert!(
            is_simple_polygon(contour),
            "{}: contour {} self-intersects: {:?}",
            msg,
            index,
            contour
        );
    }
}

fn segments_cross(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let orient = |a: Point, b: Point, c: Point| (b - a).cross(c - a);
    let d1 = orient(p3, p4, p1);
    let d2 = orient(p3, p4, p2);
    let d3 = orient(p1, p2, p3);
    let d4 = orient(p1, p2, p4);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_simple() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(is_simple_polygon(&square));
    }

    #[test]
    fn bow_tie_is_not_simple() {
        let bow_tie = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        assert!(!is_simple_polygon(&bow_tie));
    }

    #[test]
    fn closing_duplicate_is_ignored() {
        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
            Point::new(0.0, 0.0),
        ];
        assert!(is_simple_polygon(&triangle));
    }
}
