//! Animation system for Folio
//!
//! Values are advanced explicitly with `on_frame(frame_time_nanos)` by whoever
//! owns the render loop, so every animation can be driven by a virtual clock
//! in tests. [`MutatorMutex`] serializes the operations that move a value.

mod animation;
mod frame_clock;
mod mutator;

pub use animation::*;
pub use frame_clock::FrameClock;
pub use mutator::{MutationError, MutationId, MutatorMutex};
