//! Clip paths and shadow gradients built from [`CurlPoints`].

use folio_ui_graphics::{Brush, Color, Path, Point};

use super::geometry::{CurlPoints, MIN_TOUCH_DELTA};

/// Region of the page still lying flat: the viewport minus the curled corner.
///
/// Runs along the fold outline `c → e → b → a → k → h → j` and closes through
/// the viewport corners away from the grabbed one. When the outline leaves
/// the viewport (`j` past the far edge, or `c` a hair past the binding) those
/// corners are pushed out to meet it, so the outline never crosses the
/// closing edges. The canvas clips the overhang.
pub fn build_path_a(
    points: &CurlPoints,
    width: f32,
    height: f32,
    is_top: bool,
    is_left: bool,
) -> Path {
    let CurlPoints { a, b, c, e, h, j, k, .. } = *points;
    let fold_x = if is_left { 0.0 } else { width };
    let near_x = if is_left {
        width.max(c.x)
    } else {
        c.x.min(0.0)
    };
    let far_y = if is_top {
        height.max(j.y)
    } else {
        j.y.min(0.0)
    };

    let mut path = Path::new();
    if is_top {
        path.move_to(near_x, 0.0);
    } else {
        path.move_to(near_x, far_y).line_to(near_x, height);
    }
    path.line_to(c.x, c.y)
        .quadratic_to(e.x, e.y, b.x, b.y)
        .line_to(a.x, a.y)
        .line_to(k.x, k.y)
        .quadratic_to(h.x, h.y, j.x, j.y)
        .line_to(fold_x, far_y);
    if is_top {
        path.line_to(near_x, far_y);
    }
    path.close();
    path
}

/// The curled-back cone showing the reverse of the page.
pub fn build_path_c(points: &CurlPoints) -> Path {
    let CurlPoints { a, b, d, i, k, .. } = *points;
    let mut path = Path::new();
    path.move_to(i.x, i.y)
        .line_to(d.x, d.y)
        .line_to(b.x, b.y)
        .line_to(a.x, a.y)
        .line_to(k.x, k.y)
        .close();
    path
}

/// Perpendicular to the fold line `c–j`, on the side of `toward`. Not
/// normalized.
pub fn fold_normal_toward(c: Point, j: Point, toward: Point) -> Point {
    let along = j - c;
    let n1 = Point::new(along.y, -along.x);
    if n1.dot(toward - c) > 0.0 {
        n1
    } else {
        -n1
    }
}

/// Unit vector along `v`, or zero when `v` is too short to have a direction.
pub fn normalize(v: Point) -> Point {
    let length = v.length();
    if length > MIN_TOUCH_DELTA {
        v / length
    } else {
        Point::ZERO
    }
}

/// Gradient starting on the fold at `c` and running `shadow_width` pixels
/// toward `toward`. `None` when the shadow would be empty or has no
/// direction.
pub fn fold_shadow_brush(
    c: Point,
    j: Point,
    toward: Point,
    shadow_width: f32,
    colors: &[Color],
) -> Option<Brush> {
    if !(shadow_width > 0.0) {
        return None;
    }
    let unit = normalize(fold_normal_toward(c, j, toward));
    if unit == Point::ZERO {
        return None;
    }
    Some(Brush::linear_gradient(colors, c, c + unit * shadow_width))
}
