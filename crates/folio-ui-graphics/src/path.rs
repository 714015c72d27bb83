//! Vector paths built from line and quadratic segments.

use smallvec::SmallVec;

use crate::geometry::{Point, Rect};

/// How a clip path combines with the clip already in effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClipOp {
    /// Keep only what lies inside the path.
    #[default]
    Intersect,
    /// Keep only what lies outside the path.
    Difference,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, end: Point },
    Close,
}

/// A sequence of path commands. The curl paths have at most a dozen verbs, so
/// they stay inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 12]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Every explicit vertex of the path (end points and quad controls).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().flat_map(|command| {
            let pair: SmallVec<[Point; 2]> = match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => smallvec::smallvec![p],
                PathCommand::QuadTo { control, end } => smallvec::smallvec![control, end],
                PathCommand::Close => SmallVec::new(),
            };
            pair.into_iter()
        })
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.points())
    }

    /// Approximates each contour with a polyline, splitting every quadratic
    /// segment into `segments_per_curve` pieces.
    pub fn flatten(&self, segments_per_curve: usize) -> Vec<Vec<Point>> {
        let segments = segments_per_curve.max(1);
        let mut contours = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if current.len() > 1 {
                        contours.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                }
                PathCommand::LineTo(p) => current.push(p),
                PathCommand::QuadTo { control, end } => {
                    let start = current.last().copied().unwrap_or(control);
                    for step in 1..=segments {
                        let t = step as f32 / segments as f32;
                        current.push(quad_point(start, control, end, t));
                    }
                }
                PathCommand::Close => {
                    if current.len() > 1 {
                        contours.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if current.len() > 1 {
            contours.push(current);
        }
        contours
    }

    /// Even-odd containment test against the flattened path.
    pub fn contains(&self, point: Point) -> bool {
        self.flatten(16)
            .iter()
            .filter(|contour| crosses_odd(contour, point))
            .count()
            % 2
            == 1
    }
}

fn quad_point(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

fn crosses_odd(polygon: &[Point], point: Point) -> bool {
    let mut inside = false;
    let n = polygon.len();
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
