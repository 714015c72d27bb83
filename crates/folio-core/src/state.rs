//! Gesture and settle state for one reader surface.
//!
//! The page position lives in an [`Animatable<Point>`]: drags snap it, taps and
//! releases animate it. Every operation that moves it goes through the
//! [`MutatorMutex`], so a new gesture always supersedes an unfinished settle
//! instead of interleaving with it.

use folio_animation::{Animatable, MutationId, MutatorMutex};
use folio_ui_graphics::{IntSize, Point};

use crate::animation::PageAnimation;
use crate::config::PageTurnConfig;
use crate::page::Direction;

/// An interpolation that owns the mutation slot until it lands.
#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: MutationId,
    /// Direction to report once the value arrives; `None` for plain
    /// programmatic moves that commit nothing.
    commit: Option<Direction>,
}

#[derive(Debug)]
pub struct PageAnimationState {
    viewport_size: IntSize,
    config: PageTurnConfig,
    mutex: MutatorMutex,
    in_flight: Option<InFlight>,
    start_point: Point,
    previous_offset: Point,
    offset: Animatable<Point>,
    dragging: bool,
    has_next: bool,
    has_previous: bool,
    direction: Direction,
}

impl Default for PageAnimationState {
    fn default() -> Self {
        Self::new(PageTurnConfig::default())
    }
}

impl PageAnimationState {
    pub fn new(config: PageTurnConfig) -> Self {
        Self {
            viewport_size: IntSize::ZERO,
            config,
            mutex: MutatorMutex::new(),
            in_flight: None,
            start_point: Point::ZERO,
            previous_offset: Point::ZERO,
            offset: Animatable::new(Point::ZERO),
            dragging: false,
            has_next: false,
            has_previous: false,
            direction: Direction::None,
        }
    }

    pub fn config(&self) -> &PageTurnConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PageTurnConfig) {
        self.config = config;
    }

    pub fn viewport_size(&self) -> IntSize {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: IntSize) {
        self.viewport_size = size;
    }

    pub fn width(&self) -> f32 {
        self.viewport_size.width as f32
    }

    pub fn height(&self) -> f32 {
        self.viewport_size.height as f32
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Refreshed from the content provider on every layout pass.
    pub fn set_availability(&mut self, has_previous: bool, has_next: bool) {
        self.has_previous = has_previous;
        self.has_next = has_next;
    }

    /// Direction resolved for the current frame. Only meaningful while
    /// [`is_running`](Self::is_running).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn current_offset(&self) -> Point {
        self.offset.value()
    }

    pub fn previous_offset(&self) -> Point {
        self.previous_offset
    }

    /// Where the running interpolation is heading (the current offset when idle).
    pub fn target_offset(&self) -> Point {
        self.offset.target()
    }

    /// Horizontal travel since the gesture started.
    pub fn delta_x(&self) -> f32 {
        self.offset.value().x - self.start_point.x
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.offset.is_running() || self.dragging
    }

    /// Whether the live direction points at a page that exists.
    pub fn can_run_animation(&self) -> bool {
        match self.direction {
            Direction::Next => self.has_next,
            Direction::Previous => self.has_previous,
            Direction::None => false,
        }
    }

    /// Pointer went down and started moving. The live direction of any
    /// superseded gesture is dropped; the next layout pass resolves a new one.
    pub fn start_drag(&mut self, point: Point) {
        self.mutate(|state| {
            state.start_point = point;
            state.previous_offset = state.offset.value();
            state.offset.snap_to(point);
            state.dragging = true;
            state.direction = Direction::None;
        });
        log::debug!("drag started at ({}, {})", point.x, point.y);
    }

    /// Follows the finger exactly; no interpolation.
    pub fn drag(&mut self, delta: Point) {
        self.mutate(|state| {
            state.previous_offset = state.offset.value();
            state.offset.snap_to(state.previous_offset + delta);
        });
    }

    /// Finger lifted. Resolves whether the drag commits, then settles toward
    /// the variant's target for that direction. The direction is returned
    /// right away; the commit itself is reported by [`on_frame`](Self::on_frame)
    /// once the settle lands.
    pub fn drag_end(&mut self, animation: &dyn PageAnimation) -> Direction {
        let direction = animation.resolve_release_direction(self);
        self.dragging = false;
        let target = animation.settle_target(self, direction);
        log::debug!(
            "drag released after {:.1}px, settling {:?}",
            self.delta_x(),
            direction
        );
        self.settle(direction, target);
        direction
    }

    /// Gesture aborted by the platform; drop everything.
    pub fn drag_cancel(&mut self) {
        self.dragging = false;
        self.reset_animation();
        log::debug!("drag cancelled");
    }

    /// Pointer pressed for a tap: re-baseline the gesture at `point`.
    pub fn start_tap(&mut self, point: Point) {
        self.mutate(|state| {
            state.start_point = point;
            state.previous_offset = state.offset.value();
            state.offset.snap_to(point);
            state.dragging = false;
            state.direction = Direction::None;
        });
    }

    /// Tap at `point`. Direction comes from the edge zone alone, then the
    /// page settles exactly like a released drag.
    pub fn tap(&mut self, point: Point, animation: &dyn PageAnimation) -> Direction {
        self.start_tap(point);
        let direction = animation.resolve_tap_direction(self, point);
        let target = animation.settle_target(self, direction);
        log::debug!("tap at ({}, {}) resolved {:?}", point.x, point.y, direction);
        self.settle(direction, target);
        direction
    }

    /// Interpolates to `offset` with the configured settle animation.
    pub fn animate_to(&mut self, offset: Point) {
        self.begin_interpolation(offset, None);
    }

    /// Moves to `offset` immediately.
    pub fn snap_to(&mut self, offset: Point) {
        self.mutate(|state| {
            state.previous_offset = state.offset.value();
            state.offset.snap_to(offset);
        });
    }

    /// Re-baselines at the origin after a committed turn (or a cancel).
    pub fn reset_animation(&mut self) {
        self.mutate(|state| {
            state.previous_offset = Point::ZERO;
            state.start_point = Point::ZERO;
            state.offset.snap_to(Point::ZERO);
            state.direction = Direction::None;
        });
    }

    /// Advances the in-flight interpolation. Returns the settled direction
    /// when a drag-release or tap settle lands this frame.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Option<Direction> {
        let in_flight = self.in_flight?;
        if !self.mutex.is_current(in_flight.id) {
            self.in_flight = None;
            return None;
        }
        if self.offset.on_frame(frame_time_nanos) {
            return None;
        }
        self.in_flight = None;
        if let Err(err) = self.mutex.finish(in_flight.id) {
            log::debug!("dropping settle result: {err}");
            return None;
        }
        if let Some(direction) = in_flight.commit {
            log::debug!("settle landed, direction {direction:?}");
        }
        in_flight.commit
    }

    fn settle(&mut self, direction: Direction, target: Point) {
        self.begin_interpolation(target, Some(direction));
    }

    fn begin_interpolation(&mut self, target: Point, commit: Option<Direction>) {
        let id = self.begin_mutation();
        self.previous_offset = self.offset.value();
        self.offset.animate_to(target, self.config.settle_animation);
        self.in_flight = Some(InFlight { id, commit });
    }

    /// Immediate mutation: take the slot, apply `block`, release.
    fn mutate<R>(&mut self, block: impl FnOnce(&mut Self) -> R) -> R {
        let id = self.begin_mutation();
        let result = block(self);
        if let Err(err) = self.mutex.finish(id) {
            log::warn!("immediate mutation lost the slot: {err}");
        }
        result
    }

    fn begin_mutation(&mut self) -> MutationId {
        let id = self.mutex.begin();
        if let Some(superseded) = self.in_flight.take() {
            self.offset.stop();
            if let Some(direction) = superseded.commit {
                log::debug!(
                    "settle {:?} interrupted at ({}, {})",
                    direction,
                    self.offset.value().x,
                    self.offset.value().y
                );
            }
        }
        id
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
