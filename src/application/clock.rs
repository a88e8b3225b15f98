/// Generations per second used when nothing else is configured
pub const DEFAULT_FPS: f32 = 20.0;

/// TickClock paces playback at a fixed number of generations per second.
/// It emits at most one tick per call and drops any backlog, so a slow
/// frame never causes a burst of catch-up generations.
#[derive(Clone, Debug)]
pub struct TickClock {
    interval: f32,
    elapsed: f32,
}

impl TickClock {
    /// `fps` must be positive; the configuration layer validates it
    pub fn new(fps: f32) -> Self {
        Self {
            interval: 1.0 / fps,
            elapsed: 0.0,
        }
    }

    pub fn fps(&self) -> f32 {
        1.0 / self.interval
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Account for `delta_time` seconds and report whether a tick is due.
    /// While paused no time accumulates.
    pub fn advance(&mut self, delta_time: f32, playing: bool) -> bool {
        if !playing {
            self.reset();
            return false;
        }

        self.elapsed += delta_time;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed %= self.interval;
        true
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}
