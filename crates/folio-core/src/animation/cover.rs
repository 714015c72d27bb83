use folio_ui_graphics::{Brush, Color, Point, Transform};

use super::{settle_target_with_travel, transformed_page, PageAnimation};
use crate::draw::DrawInstruction;
use crate::page::{Direction, PageType};
use crate::state::PageAnimationState;

const EDGE_SHADOW_FRACTION: f32 = 0.06;
const EDGE_SHADOW_MIN: f32 = 8.0;
const EDGE_SHADOW_MAX: f32 = 32.0;
const EDGE_SHADOW_ALPHA: f32 = 0.25;

/// The top page slides off (NEXT) or slides back on (PREVIOUS) over a
/// stationary page, casting a soft shadow from its moving edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverPageAnimation;

impl CoverPageAnimation {
    /// Width of the edge shadow for a viewport `width` pixels wide.
    pub fn shadow_width(width: f32) -> f32 {
        (width * EDGE_SHADOW_FRACTION).clamp(EDGE_SHADOW_MIN, EDGE_SHADOW_MAX)
    }

    /// The moving page travels far enough for its shadow to leave the screen.
    fn max_travel(width: f32) -> f32 {
        width + Self::shadow_width(width)
    }

    fn edge_shadow(edge_x: f32, width: f32, height: f32) -> Option<DrawInstruction> {
        let shadow = Self::shadow_width(width);
        if height <= 0.0 || edge_x >= width || edge_x + shadow <= 0.0 {
            return None;
        }
        Some(DrawInstruction::fill(Brush::horizontal_gradient(
            &[Color::BLACK.with_alpha(EDGE_SHADOW_ALPHA), Color::TRANSPARENT],
            edge_x,
            edge_x + shadow,
        )))
    }
}

impl PageAnimation for CoverPageAnimation {
    fn name(&self) -> &'static str {
        "cover"
    }

    fn transform_for(&self, state: &PageAnimationState, slot: PageType) -> Option<Transform> {
        let width = state.width();
        if width <= 0.0 {
            return None;
        }
        let max_travel = Self::max_travel(width);
        let delta_x = state.delta_x();
        match (state.direction(), slot) {
            (_, PageType::Next) => None,
            (Direction::Next, _) => Some(Transform::translation(
                delta_x.clamp(-max_travel, 0.0),
                0.0,
            )),
            (Direction::Previous, PageType::Previous) => Some(Transform::translation(
                -width + delta_x.clamp(0.0, max_travel),
                0.0,
            )),
            _ => None,
        }
    }

    fn draw_instructions(&self, state: &PageAnimationState) -> Vec<DrawInstruction> {
        let width = state.width();
        let height = state.height();
        let max_travel = Self::max_travel(width.max(0.0));
        let delta_x = state.delta_x();

        let mut instructions = Vec::new();
        match state.direction() {
            Direction::Next => {
                instructions.extend(DrawInstruction::page(PageType::Next));
                let edge_x = width + delta_x.clamp(-max_travel, 0.0);
                instructions.extend(Self::edge_shadow(edge_x, width, height));
                instructions.extend(transformed_page(self, state, PageType::Current));
            }
            Direction::Previous => {
                instructions.extend(DrawInstruction::page(PageType::Current));
                let edge_x = delta_x.clamp(0.0, max_travel);
                instructions.extend(Self::edge_shadow(edge_x, width, height));
                instructions.extend(transformed_page(self, state, PageType::Previous));
            }
            Direction::None => {
                instructions.extend(transformed_page(self, state, PageType::Current));
            }
        }
        instructions
    }

    fn settle_target(&self, state: &PageAnimationState, direction: Direction) -> Point {
        settle_target_with_travel(state, direction, Self::max_travel(state.width()))
    }
}
