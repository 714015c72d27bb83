//! Plays a scripted reading session against the page-turn engine and logs
//! every frame. Run with `RUST_LOG=trace` to see the canvas calls.
//!
//! Usage: `folio-demo [cover|slide|curl] [page-count]`

mod book;
mod trace_canvas;

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use folio_animation::FrameClock;
use folio_core::{animation_by_name, IntSize, PageAnimationContent, PageInputEvent, Point};

use book::Book;
use trace_canvas::TraceCanvas;

const VIEWPORT: IntSize = IntSize {
    width: 1080,
    height: 1920,
};
const FRAME: Duration = Duration::from_millis(16);
/// Frames allowed for one settle before the script gives up waiting.
const MAX_SETTLE_FRAMES: usize = 240;

enum Step {
    Swipe { from: Point, to: Point },
    Tap(Point),
}

fn script() -> Vec<Step> {
    let w = VIEWPORT.width as f32;
    let h = VIEWPORT.height as f32;
    vec![
        Step::Swipe {
            from: Point::new(w * 0.95, h * 0.9),
            to: Point::new(w * 0.2, h * 0.8),
        },
        Step::Tap(Point::new(w * 0.9, h * 0.5)),
        Step::Swipe {
            from: Point::new(w * 0.05, h * 0.1),
            to: Point::new(w * 0.7, h * 0.2),
        },
        // Short drag under the swipe threshold springs back.
        Step::Swipe {
            from: Point::new(w * 0.6, h * 0.5),
            to: Point::new(w * 0.55, h * 0.5),
        },
        Step::Tap(Point::new(w * 0.1, h * 0.5)),
        Step::Tap(Point::new(w * 0.1, h * 0.5)),
    ]
}

struct Session {
    content: PageAnimationContent,
    book: Book,
    clock: FrameClock,
    frames: usize,
}

impl Session {
    fn frame(&mut self) {
        thread::sleep(FRAME);
        self.content
            .on_frame(self.clock.frame_time_nanos(), &mut self.book);
        let mut canvas = TraceCanvas::default();
        self.content.draw(&mut canvas);
        self.frames += 1;
        log::debug!(
            "frame {} offset {:?} direction {:?}: {}",
            self.frames,
            self.content.state().current_offset(),
            self.content.state().direction(),
            canvas.summary()
        );
    }

    fn input(&mut self, event: PageInputEvent) {
        if let Some(direction) = self.content.on_input(event) {
            log::info!("{event:?} -> settling {direction:?}");
        }
        self.frame();
    }

    fn run(&mut self, step: &Step) -> Result<()> {
        match *step {
            Step::Swipe { from, to } => {
                self.input(PageInputEvent::DragStart(from));
                let steps = 12;
                let delta = (to - from) / steps as f32;
                for _ in 0..steps {
                    self.input(PageInputEvent::Drag(delta));
                }
                if let Some(slot) = self.content.state().direction().target_page() {
                    log::debug!("revealing {:?}", self.book.title_for(slot));
                }
                self.input(PageInputEvent::DragEnd);
            }
            Step::Tap(point) => self.input(PageInputEvent::Tap(point)),
        }
        for _ in 0..MAX_SETTLE_FRAMES {
            if self.content.is_idle() {
                return Ok(());
            }
            self.frame();
        }
        bail!("page still moving after {MAX_SETTLE_FRAMES} frames")
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args().skip(1);
    let variant = args.next().unwrap_or_else(|| "curl".to_string());
    let pages = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("page count {raw:?} is not a number"))?,
        None => 4,
    };
    let Some(animation) = animation_by_name(&variant) else {
        bail!("unknown page animation {variant:?}; expected cover, slide or curl");
    };

    log::info!("{} turn over {pages} pages", animation.name());
    let mut content = PageAnimationContent::new(animation);
    content.on_size_changed(VIEWPORT);
    let mut session = Session {
        content,
        book: Book::with_pages(pages),
        clock: FrameClock::new(),
        frames: 0,
    };
    session.frame();

    for (index, step) in script().iter().enumerate() {
        session
            .run(step)
            .with_context(|| format!("script step {}", index + 1))?;
    }
    log::info!(
        "finished on {} after {} frames",
        session.book.current_title(),
        session.frames
    );
    Ok(())
}
