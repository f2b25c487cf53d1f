//! Fixed-step frame driving for headless runs.
//!
//! Frames advance by a constant logical tick, so a scenario produces the same
//! colors on every machine. Counters persist across the steps of one run.

use crate::app::ThemeApp;
use crate::host::ScreenMetrics;
use anyhow::{bail, Result};
use std::ops::ControlFlow;

/// Screen size and frame pacing for a headless run.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    pub width: u32,
    pub height: u32,
    /// Logical milliseconds per frame.
    pub tick_ms: u64,
    /// Range-check every n-th frame (1 = every frame).
    pub check_every_frames: u32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 390,
            height: 844,
            tick_ms: 16,
            check_every_frames: 1,
        }
    }
}

impl HeadlessRunConfig {
    pub fn screen_metrics(&self) -> ScreenMetrics {
        ScreenMetrics::new(self.width as f32, self.height as f32)
    }

    /// Whole frames needed to cover `ms`, rounded up
    pub fn frames_for(&self, ms: u64) -> u32 {
        let tick = self.tick_ms.max(1);
        let frames = ms.div_ceil(tick);
        frames.min(u32::MAX as u64) as u32
    }
}

/// What the driver reports to the per-frame callback
#[derive(Debug, Clone, Copy)]
pub struct FrameStep {
    /// Index within the current batch
    pub index: u32,
    /// Transition still running after this frame
    pub animating: bool,
    /// This frame is due for a range check
    pub check: bool,
}

/// Advances a [`ThemeApp`] in fixed ticks and counts frames and time.
#[derive(Debug)]
pub struct FrameDriver {
    tick_ms: u64,
    check_every: u32,
    frames: u64,
    elapsed_ms: u64,
}

impl FrameDriver {
    pub fn new(cfg: &HeadlessRunConfig) -> Result<Self> {
        if cfg.width == 0 || cfg.height == 0 {
            bail!("headless screen {}x{} must be non-empty", cfg.width, cfg.height);
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        Ok(Self {
            tick_ms: cfg.tick_ms,
            check_every: cfg.check_every_frames.max(1),
            frames: 0,
            elapsed_ms: 0,
        })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Run up to `budget` frames. The last frame of a batch is always checked.
    /// Returns the value the callback broke with, if any.
    pub fn run<B>(
        &mut self,
        app: &mut ThemeApp,
        budget: u32,
        mut on_frame: impl FnMut(&mut ThemeApp, FrameStep) -> ControlFlow<B>,
    ) -> Option<B> {
        for index in 0..budget {
            let animating = app.frame(self.tick_ms as f32);
            self.frames = self.frames.saturating_add(1);
            self.elapsed_ms = self.elapsed_ms.saturating_add(self.tick_ms);

            let nth = index + 1;
            let step = FrameStep {
                index,
                animating,
                check: nth % self.check_every == 0 || nth == budget,
            };
            if let ControlFlow::Break(value) = on_frame(app, step) {
                return Some(value);
            }
        }
        None
    }
}
