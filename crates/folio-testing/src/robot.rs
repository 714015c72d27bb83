//! Robot-style driver for page-turn tests
//!
//! [`PageTurnRobot`] owns a [`PageAnimationContent`], a [`FakePages`] book and
//! a virtual frame clock. Every interaction is followed by a frame, the way a
//! real host pumps vsync between pointer events.
//!
//! # Example
//!
//! ```
//! use folio_core::{CurlPageAnimation, PageType};
//! use folio_testing::{FakePages, PageTurnRobot};
//! use folio_ui_graphics::Point;
//!
//! let mut robot = PageTurnRobot::new(Box::new(CurlPageAnimation), 1000, 1500, FakePages::new(3));
//! robot.swipe(Point::new(900.0, 1200.0), Point::new(300.0, 1100.0), 6);
//! assert_eq!(robot.wait_for_idle(), vec![PageType::Next]);
//! assert_eq!(robot.pages().index(), 1);
//! ```

use folio_core::{Direction, PageAnimation, PageAnimationContent, PageInputEvent, PageType};
use folio_ui_graphics::{IntSize, Point};

use crate::canvas::RecordingCanvas;
use crate::pages::FakePages;

/// Upper bound for [`PageTurnRobot::wait_for_idle`]; ten seconds of frames.
const MAX_IDLE_FRAMES: usize = 600;

pub struct PageTurnRobot {
    content: PageAnimationContent,
    pages: FakePages,
    clock_nanos: u64,
    reported_commits: usize,
}

impl PageTurnRobot {
    /// One 60 Hz frame.
    pub const FRAME_NANOS: u64 = 16_666_667;

    pub fn new(
        animation: Box<dyn PageAnimation>,
        width: i32,
        height: i32,
        pages: FakePages,
    ) -> Self {
        let mut content = PageAnimationContent::new(animation);
        content.on_size_changed(IntSize::new(width, height));
        let mut robot = Self {
            content,
            pages,
            clock_nanos: 0,
            reported_commits: 0,
        };
        robot.advance_frame();
        robot
    }

    pub fn content(&self) -> &PageAnimationContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut PageAnimationContent {
        &mut self.content
    }

    pub fn state(&self) -> &folio_core::PageAnimationState {
        self.content.state()
    }

    pub fn pages(&self) -> &FakePages {
        &self.pages
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.clock_nanos
    }

    /// Advances the virtual clock by one frame.
    pub fn advance_frame(&mut self) -> Option<PageType> {
        self.clock_nanos += Self::FRAME_NANOS;
        self.content.on_frame(self.clock_nanos, &mut self.pages)
    }

    /// Advances `frames` frames, returning any commits in order.
    pub fn advance_frames(&mut self, frames: usize) -> Vec<PageType> {
        (0..frames).filter_map(|_| self.advance_frame()).collect()
    }

    pub fn press(&mut self, point: Point) {
        self.content.on_input(PageInputEvent::DragStart(point));
        self.advance_frame();
    }

    pub fn move_by(&mut self, delta: Point) {
        self.content.on_input(PageInputEvent::Drag(delta));
        self.advance_frame();
    }

    /// Pointer down at `from`, then `steps` equal moves ending on `to`. The
    /// pointer stays down.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) {
        let steps = steps.max(1);
        self.press(from);
        let step = (to - from) / steps as f32;
        for _ in 0..steps {
            self.move_by(step);
        }
    }

    pub fn release(&mut self) -> Direction {
        let direction = self
            .content
            .on_input(PageInputEvent::DragEnd)
            .unwrap_or_default();
        self.advance_frame();
        direction
    }

    pub fn cancel(&mut self) {
        self.content.on_input(PageInputEvent::DragCancel);
        self.advance_frame();
    }

    pub fn tap(&mut self, point: Point) -> Direction {
        let direction = self
            .content
            .on_input(PageInputEvent::Tap(point))
            .unwrap_or_default();
        self.advance_frame();
        direction
    }

    /// Drag then release.
    pub fn swipe(&mut self, from: Point, to: Point, steps: usize) -> Direction {
        self.drag(from, to, steps);
        self.release()
    }

    /// Pumps frames until nothing is running. Returns the commits delivered
    /// since the previous call.
    pub fn wait_for_idle(&mut self) -> Vec<PageType> {
        for _ in 0..MAX_IDLE_FRAMES {
            if self.content.is_idle() {
                break;
            }
            self.advance_frame();
        }
        assert!(
            self.content.is_idle(),
            "page turn still running after {MAX_IDLE_FRAMES} frames"
        );
        let commits = self.pages.commits()[self.reported_commits..].to_vec();
        self.reported_commits = self.pages.commits().len();
        commits
    }

    /// Paints the current frame into a fresh recording canvas.
    pub fn draw(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.content.draw(&mut canvas);
        canvas
    }
}
