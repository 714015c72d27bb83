use web_time::Instant;

/// Wall-clock source of frame timestamps.
///
/// Animations only ever see the `u64` nanos this returns, so a test can swap
/// it for a hand-advanced counter.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    origin: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Nanoseconds since the clock was created.
    pub fn frame_time_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    pub fn frame_time_millis(&self) -> u64 {
        self.frame_time_nanos() / 1_000_000
    }
}
