//! Brushes, gradient stops and blend modes

use crate::color::Color;
use crate::geometry::Point;

/// A color pinned to a fractional position along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }

    /// Spreads `colors` evenly over `[0, 1]`.
    pub fn evenly_spaced(colors: &[Color]) -> Vec<ColorStop> {
        match colors.len() {
            0 => Vec::new(),
            1 => vec![ColorStop::new(0.0, colors[0])],
            n => colors
                .iter()
                .enumerate()
                .map(|(index, color)| ColorStop::new(index as f32 / (n - 1) as f32, *color))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Linear gradient between two points; colors clamp beyond the ends.
    LinearGradient {
        stops: Vec<ColorStop>,
        start: Point,
        end: Point,
    },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: &[Color], start: Point, end: Point) -> Self {
        Brush::LinearGradient {
            stops: ColorStop::evenly_spaced(colors),
            start,
            end,
        }
    }

    /// Horizontal gradient spanning `start_x..end_x`.
    pub fn horizontal_gradient(colors: &[Color], start_x: f32, end_x: f32) -> Self {
        Self::linear_gradient(colors, Point::new(start_x, 0.0), Point::new(end_x, 0.0))
    }
}

/// Porter-Duff / separable blend modes the page composition asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    SrcOver,
    Screen,
    Multiply,
}
