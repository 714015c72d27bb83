use folio_ui_graphics::Transform;

use super::PageAnimation;
use crate::page::{Direction, PageType};
use crate::state::PageAnimationState;

/// Both pages move together, the incoming one pushing the current one out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidePageAnimation;

impl PageAnimation for SlidePageAnimation {
    fn name(&self) -> &'static str {
        "slide"
    }

    fn transform_for(&self, state: &PageAnimationState, slot: PageType) -> Option<Transform> {
        let width = state.width();
        if width <= 0.0 {
            return None;
        }
        let delta_x = state.delta_x();
        let dx = match (state.direction(), slot) {
            (Direction::Next, PageType::Current) => delta_x.clamp(-width, 0.0),
            (Direction::Next, PageType::Next) => width + delta_x.clamp(-width, 0.0),
            (Direction::Previous, PageType::Current) => delta_x.clamp(0.0, width),
            (Direction::Previous, PageType::Previous) => -width + delta_x.clamp(0.0, width),
            _ => return None,
        };
        Some(Transform::translation(dx, 0.0))
    }
}
