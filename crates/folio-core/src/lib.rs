//! Page-turn engine for Folio
//!
//! Drives an interactive page-turn effect over three logical page slots
//! (previous, current, next):
//!
//! - [`PageAnimationState`] tracks the drag/tap gesture and the settle
//!   animation, serializing every mutation.
//! - [`PageAnimation`] is the per-effect strategy. [`CoverPageAnimation`],
//!   [`SlidePageAnimation`] and [`CurlPageAnimation`] ship with the crate.
//! - [`curl`] holds the pure fold geometry behind the curl effect.
//! - [`PageAnimationContent`] glues them together once per frame and replays
//!   the resulting [`DrawInstruction`]s into a host [`PageCanvas`].

pub mod animation;
pub mod config;
pub mod content;
pub mod curl;
pub mod draw;
pub mod error;
pub mod gesture_constants;
pub mod page;
pub mod state;

pub use animation::{animation_by_name, CoverPageAnimation, PageAnimation, SlidePageAnimation};
pub use config::PageTurnConfig;
pub use content::{PageAnimationContent, PageContentProvider, PageInputEvent};
pub use curl::CurlPageAnimation;
pub use draw::{DrawInstruction, PageCanvas, PageLayers};
pub use error::CurlGeometryError;
pub use page::{Direction, PageType};
pub use state::PageAnimationState;

pub use folio_animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
pub use folio_ui_graphics::{
    BlendMode, Brush, ClipOp, Color, ColorStop, IntSize, Path, PathCommand, Point, Transform,
};
