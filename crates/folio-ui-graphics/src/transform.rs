//! 2D affine transforms.

use crate::geometry::Point;

/// Affine matrix mapping `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translation(dx: f32, dy: f32) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Clockwise rotation in y-down screen space.
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Returns the transform that applies `self` first and then `next`.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    /// Applies `inner` with `pivot` moved to the origin.
    pub fn about(pivot: Point, inner: &Transform) -> Transform {
        Transform::translation(-pivot.x, -pivot.y)
            .then(inner)
            .then(&Transform::translation(pivot.x, pivot.y))
    }

    /// Reflection across the infinite line through `p` and `q`: rotate the
    /// line onto the x axis, flip y, rotate back. `None` when `p == q`.
    pub fn reflection_across(p: Point, q: Point) -> Option<Transform> {
        let dir = q - p;
        if dir.length() <= f32::EPSILON {
            return None;
        }
        let angle = dir.y.atan2(dir.x);
        let inner = Transform::rotation(-angle)
            .then(&Transform::scale(1.0, -1.0))
            .then(&Transform::rotation(angle));
        Some(Transform::about(p, &inner))
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
