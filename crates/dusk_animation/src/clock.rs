//! Frame clock
//!
//! Measures wall-clock time between frames for interactive loops.

use std::time::{Duration, Instant};

/// Produces per-frame deltas in milliseconds
pub struct FrameClock {
    last_frame: Instant,
    target_fps: u32,
    /// Upper bound for a single delta, so a stalled loop does not skip a
    /// whole transition in one frame
    max_delta_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            target_fps: 60,
            max_delta_ms: 100.0,
        }
    }

    /// Nominal time between frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }

    /// Restart measuring from now (e.g. after the loop was idle)
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Milliseconds since the previous call, capped
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        dt_ms.min(self.max_delta_ms)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_sixty_fps() {
        let interval = FrameClock::new().frame_interval();
        assert!(interval > Duration::from_micros(16_600));
        assert!(interval < Duration::from_micros(16_700));
    }

    #[test]
    fn deltas_are_non_negative_and_capped() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!((0.0..=100.0).contains(&dt));
    }
}
