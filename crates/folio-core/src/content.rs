//! Per-frame driver tying input, state, variant and rasterizer together.
//!
//! A host calls [`PageAnimationContent::on_input`] for pointer events,
//! [`PageAnimationContent::on_frame`] once per vsync and
//! [`PageAnimationContent::draw`] when it paints.

use folio_ui_graphics::{IntSize, Point};

use crate::animation::{CoverPageAnimation, PageAnimation};
use crate::config::PageTurnConfig;
use crate::draw::{execute_draw_instructions, DrawInstruction, PageCanvas, PageLayers};
use crate::page::{Direction, PageType};
use crate::state::PageAnimationState;

/// Pointer input in device pixels, relative to the viewport's top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageInputEvent {
    DragStart(Point),
    /// Movement since the previous drag event.
    Drag(Point),
    DragEnd,
    DragCancel,
    Tap(Point),
}

/// Supplies the neighbouring pages and learns about committed turns.
pub trait PageContentProvider {
    fn has_next(&self) -> bool;
    fn has_previous(&self) -> bool;
    /// `slot` is the page that just became current.
    fn on_page_committed(&mut self, slot: PageType);
}

#[derive(Debug)]
pub struct PageAnimationContent {
    state: PageAnimationState,
    animation: Box<dyn PageAnimation>,
}

impl Default for PageAnimationContent {
    fn default() -> Self {
        Self::new(Box::new(CoverPageAnimation))
    }
}

impl PageAnimationContent {
    pub fn new(animation: Box<dyn PageAnimation>) -> Self {
        Self::with_config(animation, PageTurnConfig::default())
    }

    pub fn with_config(animation: Box<dyn PageAnimation>, config: PageTurnConfig) -> Self {
        Self {
            state: PageAnimationState::new(config),
            animation,
        }
    }

    pub fn state(&self) -> &PageAnimationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PageAnimationState {
        &mut self.state
    }

    pub fn animation(&self) -> &dyn PageAnimation {
        self.animation.as_ref()
    }

    /// Swaps the effect. Takes over from the next frame; a gesture in
    /// progress keeps going under the new variant's rules.
    pub fn set_animation(&mut self, animation: Box<dyn PageAnimation>) {
        log::debug!(
            "page animation {} -> {}",
            self.animation.name(),
            animation.name()
        );
        self.animation = animation;
    }

    pub fn on_size_changed(&mut self, size: IntSize) {
        self.state.set_viewport_size(size);
    }

    /// Routes one pointer event. Releases and taps return the direction the
    /// page is now settling toward; the turn itself commits from
    /// [`on_frame`](Self::on_frame).
    pub fn on_input(&mut self, event: PageInputEvent) -> Option<Direction> {
        match event {
            PageInputEvent::DragStart(point) => {
                self.state.start_drag(point);
                None
            }
            PageInputEvent::Drag(delta) => {
                self.state.drag(delta);
                None
            }
            PageInputEvent::DragEnd => Some(self.state.drag_end(self.animation.as_ref())),
            PageInputEvent::DragCancel => {
                self.state.drag_cancel();
                None
            }
            PageInputEvent::Tap(point) => Some(self.state.tap(point, self.animation.as_ref())),
        }
    }

    /// Steps the settle animation, reports a landed turn to `provider`, then
    /// refreshes availability and the live direction. Returns the slot that
    /// became current, if any.
    pub fn on_frame(
        &mut self,
        frame_time_nanos: u64,
        provider: &mut dyn PageContentProvider,
    ) -> Option<PageType> {
        let committed = self
            .state
            .on_frame(frame_time_nanos)
            .and_then(|direction| {
                let slot = direction.target_page();
                if let Some(slot) = slot {
                    log::debug!("page committed: {slot:?}");
                    provider.on_page_committed(slot);
                }
                self.state.reset_animation();
                slot
            });
        self.layout(provider);
        committed
    }

    /// Availability and direction pass. Direction is only re-resolved while a
    /// gesture or settle is running.
    pub fn layout(&mut self, provider: &dyn PageContentProvider) {
        self.state
            .set_availability(provider.has_previous(), provider.has_next());
        if !self.state.is_running() {
            return;
        }
        let direction = self.animation.resolve_direction(&self.state);
        if direction != self.state.direction() {
            log::trace!("direction {:?} -> {:?}", self.state.direction(), direction);
        }
        self.state.set_direction(direction);
    }

    /// What to draw this frame. The current page alone unless a turn toward
    /// an existing page is in progress.
    pub fn draw_instructions(&self) -> Vec<DrawInstruction> {
        if self.state.is_running() && self.state.can_run_animation() {
            self.animation.draw_instructions(&self.state)
        } else {
            DrawInstruction::page(PageType::Current)
        }
    }

    /// Records the layers this frame needs and replays the frame into
    /// `canvas`.
    pub fn draw<C: PageCanvas>(&self, canvas: &mut C) {
        let instructions = self.draw_instructions();
        let layers = PageLayers::record(canvas, &instructions);
        execute_draw_instructions(canvas, &layers, &instructions);
    }

    /// Nothing is moving and no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        !self.state.is_running()
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
