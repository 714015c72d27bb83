//! Page curl: the grabbed corner folds back along a line through the touch
//! point, revealing the target page underneath.

pub mod geometry;
pub mod paths;

use folio_ui_graphics::{BlendMode, ClipOp, Color, Transform};

use crate::animation::{default_direction, edge_zone_direction, PageAnimation};
use crate::draw::DrawInstruction;
use crate::error::CurlGeometryError;
use crate::page::{Direction, PageType};
use crate::state::PageAnimationState;

use self::geometry::{compute_curl_points, pinned_corner, CurlPoints, MIN_TOUCH_DELTA};
use self::paths::{build_path_a, build_path_c, fold_shadow_brush};

const FOLD_SHADOW_ALPHA: f32 = 0.25;
const FOLD_SHADOW_MIN: f32 = 6.0;
const BACK_SHADOW_ALPHA: f32 = 0.35;
const FRONT_SHADOW_ALPHA: f32 = 0.18;
const FRONT_SHADOW_SCALE: f32 = 0.6;
const BACK_WASH_ALPHA: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct CurlPageAnimation;

impl CurlPageAnimation {
    /// Construction points for the current frame, or why there are none.
    pub fn curl_points(
        state: &PageAnimationState,
        direction: Direction,
    ) -> Result<CurlPoints, CurlGeometryError> {
        let (is_left, is_top) = Self::grabbed_corner(state, direction);
        let width = state.width();
        let height = state.height();
        let f = pinned_corner(is_left, is_top, width, height);
        compute_curl_points(state.current_offset(), f, width, height, is_left)
    }

    /// `(is_left, is_top)` of the corner being peeled.
    fn grabbed_corner(state: &PageAnimationState, direction: Direction) -> (bool, bool) {
        (
            direction == Direction::Previous,
            state.start_point().y <= state.height() / 2.0,
        )
    }

    fn compose(
        state: &PageAnimationState,
        direction: Direction,
        target: PageType,
    ) -> Result<Vec<DrawInstruction>, CurlGeometryError> {
        let points = Self::curl_points(state, direction)?;
        let width = state.width();
        let height = state.height();
        let (is_left, is_top) = Self::grabbed_corner(state, direction);
        let path_a = build_path_a(&points, width, height, is_top, is_left);
        let path_c = build_path_c(&points);

        let mut instructions = DrawInstruction::page(target);

        let fold_width =
            (points.a.distance(points.f) / 4.0).clamp(FOLD_SHADOW_MIN, width.max(FOLD_SHADOW_MIN));
        if let Some(brush) = fold_shadow_brush(
            points.c,
            points.j,
            points.f,
            fold_width,
            &[Color::BLACK.with_alpha(FOLD_SHADOW_ALPHA), Color::TRANSPARENT],
        ) {
            instructions.push(DrawInstruction::clipped(
                path_a.clone(),
                ClipOp::Difference,
                vec![DrawInstruction::clipped(
                    path_c.clone(),
                    ClipOp::Difference,
                    vec![DrawInstruction::fill(brush)],
                )],
            ));
        }

        if let Some(back) = Self::back_face(&points) {
            instructions.push(DrawInstruction::clipped(
                path_c.clone(),
                ClipOp::Intersect,
                vec![DrawInstruction::clipped(
                    path_a.clone(),
                    ClipOp::Difference,
                    back,
                )],
            ));
        }

        let back_width = (points.c.x - points.e.x)
            .abs()
            .min((points.j.y - points.h.y).abs())
            * 0.5;
        if let Some(brush) = fold_shadow_brush(
            points.c,
            points.j,
            points.a,
            back_width,
            &[Color::TRANSPARENT, Color::BLACK.with_alpha(BACK_SHADOW_ALPHA)],
        ) {
            instructions.push(DrawInstruction::clipped(
                path_c,
                ClipOp::Intersect,
                vec![DrawInstruction::clipped(
                    path_a.clone(),
                    ClipOp::Difference,
                    vec![DrawInstruction::fill(brush)],
                )],
            ));
        }

        instructions.push(DrawInstruction::clipped(
            path_a.clone(),
            ClipOp::Intersect,
            DrawInstruction::page(PageType::Current),
        ));

        if let Some(brush) = fold_shadow_brush(
            points.c,
            points.j,
            points.a,
            fold_width * FRONT_SHADOW_SCALE,
            &[Color::BLACK.with_alpha(FRONT_SHADOW_ALPHA), Color::TRANSPARENT],
        ) {
            instructions.push(DrawInstruction::clipped(
                path_a,
                ClipOp::Intersect,
                vec![DrawInstruction::fill(brush)],
            ));
        }

        Ok(instructions)
    }

    /// The current page seen from behind: reflected across the fold axis
    /// `e–h` and washed out.
    fn back_face(points: &CurlPoints) -> Option<Vec<DrawInstruction>> {
        if points.e.distance(points.h) <= MIN_TOUCH_DELTA {
            return None;
        }
        let reflection = Transform::reflection_across(points.e, points.h)?;
        let mut children = DrawInstruction::page(PageType::Current);
        children.push(DrawInstruction::fill_blended(
            Color::WHITE.with_alpha(BACK_WASH_ALPHA),
            BlendMode::Screen,
        ));
        Some(vec![DrawInstruction::Transformed {
            transform: reflection,
            children,
        }])
    }
}

impl PageAnimation for CurlPageAnimation {
    fn name(&self) -> &'static str {
        "curl"
    }

    /// Where the gesture started decides the corner being peeled; the travel
    /// sign only matters from the middle of the page.
    fn resolve_direction(&self, state: &PageAnimationState) -> Direction {
        if !state.is_running() {
            return Direction::None;
        }
        let width = state.width();
        if width <= 0.0 {
            return Direction::None;
        }
        match edge_zone_direction(
            state.start_point().x,
            width,
            state.config().edge_zone_fraction,
        ) {
            Direction::None => default_direction(state),
            edge => edge,
        }
    }

    fn transform_for(&self, _state: &PageAnimationState, _slot: PageType) -> Option<Transform> {
        None
    }

    fn draw_instructions(&self, state: &PageAnimationState) -> Vec<DrawInstruction> {
        let direction = state.direction();
        let Some(target) = direction.target_page() else {
            return DrawInstruction::page(PageType::Current);
        };
        match Self::compose(state, direction, target) {
            Ok(instructions) => instructions,
            Err(err) => {
                log::debug!("curl fallback to flat page: {err}");
                DrawInstruction::page(PageType::Current)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/curl_tests.rs"]
mod tests;
