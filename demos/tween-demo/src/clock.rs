/// Turns host timestamps (milliseconds) into per-frame deltas (seconds).
/// The host reads its own clock and passes the value in.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: u64,
}

impl FrameClock {
    pub fn new(start_ms: u64) -> Self {
        Self { last_ms: start_ms }
    }

    /// Seconds since the previous tick. A timestamp earlier than the last one yields 0.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let delta = now_ms.saturating_sub(self.last_ms) as f32 / 1000.0;
        self.last_ms = self.last_ms.max(now_ms);
        delta
    }

    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }
}
