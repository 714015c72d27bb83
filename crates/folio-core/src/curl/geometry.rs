//! Fold-line construction for the curl effect.
//!
//! The touch point `a` drags the pinned corner `f` of the page. Everything
//! else follows from the perpendicular bisector of `a–f`:
//!
//! - `g`: midpoint of `a–f`
//! - `e`, `h`: the bisector meets `f`'s horizontal and vertical edges
//! - `c`, `j`: the curled cone meets the same edges, half again past `e`/`h`
//! - `b`, `k`: the cone outline `c–j` meets `a–e` and `a–h`
//! - `d`, `i`: quarter-weighted points on the rounded fold edges
//!
//! All functions are pure; degenerate inputs are nudged by
//! [`MIN_TOUCH_DELTA`] rather than rejected.

use folio_ui_graphics::Point;

use crate::error::CurlGeometryError;

/// Smallest distance a touch keeps from the viewport edges and from the
/// pinned corner's axes. Also the floor for every denominator.
pub const MIN_TOUCH_DELTA: f32 = 0.1;

/// The eleven construction points of one curl frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurlPoints {
    pub a: Point,
    pub f: Point,
    pub g: Point,
    pub e: Point,
    pub h: Point,
    pub c: Point,
    pub j: Point,
    pub b: Point,
    pub k: Point,
    pub d: Point,
    pub i: Point,
}

impl CurlPoints {
    pub fn all(&self) -> [(&'static str, Point); 11] {
        [
            ("a", self.a),
            ("f", self.f),
            ("g", self.g),
            ("e", self.e),
            ("h", self.h),
            ("c", self.c),
            ("j", self.j),
            ("b", self.b),
            ("k", self.k),
            ("d", self.d),
            ("i", self.i),
        ]
    }

    pub fn is_valid(&self) -> bool {
        self.all().iter().all(|(_, point)| point.is_finite())
    }

    /// Every point reflected about the vertical line `x = width / 2`.
    pub fn mirrored(&self, width: f32) -> CurlPoints {
        let axis = width / 2.0;
        CurlPoints {
            a: self.a.mirror_x(axis),
            f: self.f.mirror_x(axis),
            g: self.g.mirror_x(axis),
            e: self.e.mirror_x(axis),
            h: self.h.mirror_x(axis),
            c: self.c.mirror_x(axis),
            j: self.j.mirror_x(axis),
            b: self.b.mirror_x(axis),
            k: self.k.mirror_x(axis),
            d: self.d.mirror_x(axis),
            i: self.i.mirror_x(axis),
        }
    }

    fn validate(self) -> Result<Self, CurlGeometryError> {
        match self.all().iter().find(|(_, point)| !point.is_finite()) {
            Some((name, _)) => Err(CurlGeometryError::NonFinite { point: *name }),
            None => Ok(self),
        }
    }
}

/// The page corner the touch drags: left edge when turning back, top half
/// when the gesture started in the upper half.
pub fn pinned_corner(is_left: bool, is_top: bool, width: f32, height: f32) -> Point {
    Point::new(
        if is_left { 0.0 } else { width },
        if is_top { 0.0 } else { height },
    )
}

/// Full construction for a touch at `raw_touch` dragging corner `f`.
pub fn compute_curl_points(
    raw_touch: Point,
    f: Point,
    width: f32,
    height: f32,
    is_left: bool,
) -> Result<CurlPoints, CurlGeometryError> {
    if !(width > 0.0 && height > 0.0) {
        return Err(CurlGeometryError::EmptyViewport { width, height });
    }
    let a = clamp_to_bounds(raw_touch, width, height);
    let a = avoid_corner(a, f);
    let a = clamp_to_bounds(a, width, height);
    let a = adjust_for_binding(a, f, width, height, is_left);
    calc_points(a, f).validate()
}

/// x where the curled cone crosses `f`'s horizontal edge (point `c`).
/// Negative means the fold would tear past the binding.
pub fn fold_x_coordinate(a: Point, f: Point) -> f32 {
    let g = a.midpoint(f);
    let e_x = g.x - (f.y - g.y) * (f.y - g.y) / safe_denominator(f.x - g.x);
    e_x - (f.x - e_x) / 2.0
}

/// Pulls a right-edge touch toward `f` so the fold crossing lands on x = 0.
/// The construction scales linearly with `a - f`, so shrinking that vector by
/// `width / (width - c.x)` shrinks `f.x - c.x` to exactly `width`.
pub fn adjust_point_right(a: Point, f: Point, width: f32, height: f32) -> Point {
    let c_x = fold_x_coordinate(a, f);
    let w0 = width - c_x;
    let w1 = (f.x - a.x).abs().max(MIN_TOUCH_DELTA);
    let w2 = width * w1 / w0;
    let h1 = (f.y - a.y).abs();
    let h2 = w2 * h1 / w1;
    clamp_to_bounds(
        Point::new((f.x - w2).abs(), (f.y - h2).abs()),
        width,
        height,
    )
}

/// Clamps `|value|` up to [`MIN_TOUCH_DELTA`], keeping its sign (zero counts
/// as positive).
pub fn safe_denominator(value: f32) -> f32 {
    if value.abs() >= MIN_TOUCH_DELTA {
        value
    } else if value >= 0.0 {
        MIN_TOUCH_DELTA
    } else {
        -MIN_TOUCH_DELTA
    }
}

/// Intersection of the infinite lines `p1–p2` and `p3–p4`.
pub fn intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Point {
    let denom = safe_denominator((p3.x - p4.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p3.y - p4.y));
    let cross12 = p1.x * p2.y - p2.x * p1.y;
    let cross34 = p3.x * p4.y - p4.x * p3.y;
    Point::new(
        ((p1.x - p2.x) * cross34 - (p3.x - p4.x) * cross12) / denom,
        ((p1.y - p2.y) * cross34 - cross12 * (p3.y - p4.y)) / denom,
    )
}

/// Keeps `point` at least [`MIN_TOUCH_DELTA`] inside the viewport.
pub fn clamp_to_bounds(point: Point, width: f32, height: f32) -> Point {
    let max_x = (width - MIN_TOUCH_DELTA).max(MIN_TOUCH_DELTA);
    let max_y = (height - MIN_TOUCH_DELTA).max(MIN_TOUCH_DELTA);
    Point::new(
        point.x.clamp(MIN_TOUCH_DELTA, max_x),
        point.y.clamp(MIN_TOUCH_DELTA, max_y),
    )
}

/// Nudges `point` off `f`'s axes so the bisector never runs parallel to an
/// edge.
pub fn avoid_corner(point: Point, f: Point) -> Point {
    let mut nudged = point;
    if (f.x - nudged.x).abs() < MIN_TOUCH_DELTA {
        nudged.x += if nudged.x < f.x {
            -MIN_TOUCH_DELTA
        } else {
            MIN_TOUCH_DELTA
        };
    }
    if (f.y - nudged.y).abs() < MIN_TOUCH_DELTA {
        nudged.y += if nudged.y < f.y {
            -MIN_TOUCH_DELTA
        } else {
            MIN_TOUCH_DELTA
        };
    }
    nudged
}

/// Left-edge turns are solved as their right-edge mirror image.
fn adjust_for_binding(a: Point, f: Point, width: f32, height: f32, is_left: bool) -> Point {
    if !is_left {
        return if fold_x_coordinate(a, f) < 0.0 {
            adjust_point_right(a, f, width, height)
        } else {
            a
        };
    }
    let mirrored_a = Point::new(width - a.x, a.y);
    let mirrored_f = Point::new(width, f.y);
    let adjusted = if fold_x_coordinate(mirrored_a, mirrored_f) < 0.0 {
        adjust_point_right(mirrored_a, mirrored_f, width, height)
    } else {
        mirrored_a
    };
    Point::new(width - adjusted.x, adjusted.y)
}

fn calc_points(a: Point, f: Point) -> CurlPoints {
    let g = a.midpoint(f);
    let denom_x = safe_denominator(f.x - g.x);
    let denom_y = safe_denominator(f.y - g.y);
    let e = Point::new(g.x - (f.y - g.y) * (f.y - g.y) / denom_x, f.y);
    let h = Point::new(f.x, g.y - (f.x - g.x) * (f.x - g.x) / denom_y);
    let c = Point::new(e.x - (f.x - e.x) / 2.0, f.y);
    let j = Point::new(f.x, h.y - (f.y - h.y) / 2.0);
    let b = intersection(a, e, c, j);
    let k = intersection(a, h, c, j);
    let d = (c + e * 2.0 + b) / 4.0;
    let i = (j + h * 2.0 + k) / 4.0;
    CurlPoints {
        a,
        f,
        g,
        e,
        h,
        c,
        j,
        b,
        k,
        d,
        i,
    }
}

#[cfg(test)]
#[path = "../tests/geometry_tests.rs"]
mod tests;
