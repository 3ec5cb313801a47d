use std::time::Instant;

/// Per-frame delta timer for the render loop
///
/// The timestamp starts at construction and advances on every `tick`, so
/// all input scaling sees real elapsed seconds from the first frame on.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Seconds since the previous tick (or construction); advances the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta
    }

    /// Restart timing from now, discarding the elapsed interval
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
