//! Page-turn effects.
//!
//! A [`PageAnimation`] is a stateless strategy: given the live
//! [`PageAnimationState`] it decides which way the page is turning, where a
//! release or tap should settle, and how the three page slots are drawn. The
//! trait's provided methods encode the shared gesture rules; variants override
//! only what differs.

mod cover;
mod slide;

pub use cover::CoverPageAnimation;
pub use slide::SlidePageAnimation;

use std::fmt;

use folio_ui_graphics::{Point, Transform};

use crate::curl::CurlPageAnimation;
use crate::draw::DrawInstruction;
use crate::page::{Direction, PageType};
use crate::state::PageAnimationState;

pub trait PageAnimation: fmt::Debug + Send + Sync {
    /// Short lowercase identifier, also accepted by [`animation_by_name`].
    fn name(&self) -> &'static str;

    /// Direction of the gesture in progress. Called once per frame while the
    /// state is running; must not depend on anything but `state`.
    fn resolve_direction(&self, state: &PageAnimationState) -> Direction {
        default_direction(state)
    }

    /// Transform applied to `slot` this frame, `None` to draw it in place.
    fn transform_for(&self, state: &PageAnimationState, slot: PageType) -> Option<Transform>;

    /// Describes the frame. The default stacks the incoming page beneath the
    /// current one for NEXT and above it for PREVIOUS, each through
    /// [`transform_for`](Self::transform_for).
    fn draw_instructions(&self, state: &PageAnimationState) -> Vec<DrawInstruction> {
        let order: &[PageType] = match state.direction() {
            Direction::Next => &[PageType::Next, PageType::Current],
            Direction::Previous => &[PageType::Current, PageType::Previous],
            Direction::None => &[PageType::Current],
        };
        order
            .iter()
            .flat_map(|&slot| transformed_page(self, state, slot))
            .collect()
    }

    /// Where the offset settles after a release or tap resolving `direction`.
    fn settle_target(&self, state: &PageAnimationState, direction: Direction) -> Point {
        settle_target_with_travel(state, direction, state.width())
    }

    /// Whether a released drag commits. With a live direction only that
    /// direction may commit; the result is clamped by page availability.
    fn resolve_release_direction(&self, state: &PageAnimationState) -> Direction {
        let width = state.width();
        if width <= 0.0 {
            return Direction::None;
        }
        let threshold = width * state.config().swipe_threshold;
        let delta_x = state.delta_x();
        let direction = match state.direction() {
            Direction::Next if -delta_x > threshold => Direction::Next,
            Direction::Previous if delta_x > threshold => Direction::Previous,
            Direction::Next | Direction::Previous => Direction::None,
            Direction::None if delta_x > threshold => Direction::Previous,
            Direction::None if -delta_x > threshold => Direction::Next,
            Direction::None => Direction::None,
        };
        clamp_direction_by_availability(direction, state)
    }

    /// Taps turn only inside the edge zones.
    fn resolve_tap_direction(&self, state: &PageAnimationState, point: Point) -> Direction {
        let width = state.width();
        if width <= 0.0 {
            return Direction::None;
        }
        let direction = edge_zone_direction(point.x, width, state.config().edge_zone_fraction);
        clamp_direction_by_availability(direction, state)
    }
}

/// Background and layer of `slot`, wrapped in the variant's transform.
pub(crate) fn transformed_page<A: PageAnimation + ?Sized>(
    animation: &A,
    state: &PageAnimationState,
    slot: PageType,
) -> Vec<DrawInstruction> {
    let page = DrawInstruction::page(slot);
    match animation.transform_for(state, slot) {
        Some(transform) => DrawInstruction::transformed(transform, page),
        None => page,
    }
}

/// Sign of the horizontal travel, then the edge zone of the start point.
pub fn default_direction(state: &PageAnimationState) -> Direction {
    if !state.is_running() {
        return Direction::None;
    }
    let width = state.width();
    if width <= 0.0 {
        return Direction::None;
    }
    let delta_x = state.delta_x();
    if delta_x > 0.0 {
        Direction::Previous
    } else if delta_x < 0.0 {
        Direction::Next
    } else {
        edge_zone_direction(
            state.start_point().x,
            width,
            state.config().edge_zone_fraction,
        )
    }
}

/// PREVIOUS left of `width * fraction`, NEXT right of `width * (1 - fraction)`.
pub fn edge_zone_direction(x: f32, width: f32, fraction: f32) -> Direction {
    if x < width * fraction {
        Direction::Previous
    } else if x > width * (1.0 - fraction) {
        Direction::Next
    } else {
        Direction::None
    }
}

/// Demotes a direction whose target page does not exist to NONE.
pub fn clamp_direction_by_availability(
    direction: Direction,
    state: &PageAnimationState,
) -> Direction {
    match direction {
        Direction::Next if !state.has_next() => Direction::None,
        Direction::Previous if !state.has_previous() => Direction::None,
        other => other,
    }
}

/// `start ∓ travel` horizontally for NEXT/PREVIOUS, `start` for NONE.
pub fn settle_target_with_travel(
    state: &PageAnimationState,
    direction: Direction,
    travel: f32,
) -> Point {
    let start = state.start_point();
    match direction {
        Direction::Next => start.with_x(start.x - travel),
        Direction::Previous => start.with_x(start.x + travel),
        Direction::None => start,
    }
}

/// Looks a built-in effect up by its [`PageAnimation::name`], ignoring case.
pub fn animation_by_name(name: &str) -> Option<Box<dyn PageAnimation>> {
    let name = name.trim();
    if name.eq_ignore_ascii_case(CoverPageAnimation.name()) {
        Some(Box::new(CoverPageAnimation))
    } else if name.eq_ignore_ascii_case(SlidePageAnimation.name()) {
        Some(Box::new(SlidePageAnimation))
    } else if name.eq_ignore_ascii_case(CurlPageAnimation.name()) {
        Some(Box::new(CurlPageAnimation))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../tests/animation_tests.rs"]
mod tests;
