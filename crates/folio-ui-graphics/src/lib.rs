//! Pure math/data for drawing in Folio
//!
//! This crate contains geometry primitives, colors, brushes, paths and affine
//! transforms. Nothing in here touches pixels; the page-turn engine describes
//! what it wants drawn with these types and an external rasterizer executes it.

mod brush;
mod color;
mod geometry;
mod path;
mod transform;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use path::*;
pub use transform::*;

pub mod prelude {
    pub use crate::brush::{BlendMode, Brush, ColorStop};
    pub use crate::color::Color;
    pub use crate::geometry::{IntSize, Point, Rect, Size};
    pub use crate::path::{ClipOp, Path, PathCommand};
    pub use crate::transform::Transform;
}
