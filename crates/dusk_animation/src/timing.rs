//! Duration-based animated values
//!
//! A [`TimedValue`] moves from wherever it currently is toward a target over a
//! fixed duration, shaped by an [`Easing`] curve. Assigning a new target while
//! a transition is running redirects it: the new segment starts at the
//! in-flight value, so the output never jumps.

use crate::easing::Easing;

/// Duration and curve of a timed transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl TimingConfig {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }
}

impl Default for TimingConfig {
    /// 300ms quadratic ease-in-out
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: Easing::EaseInOutQuad,
        }
    }
}

/// A scalar animated toward a target over time
#[derive(Clone, Debug)]
pub struct TimedValue {
    config: TimingConfig,
    /// Value at the start of the current segment
    from: f32,
    target: f32,
    value: f32,
    elapsed_ms: f32,
    running: bool,
}

impl TimedValue {
    /// Create a settled value
    pub fn new(initial: f32, config: TimingConfig) -> Self {
        Self {
            config,
            from: initial,
            target: initial,
            value: initial,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Current (possibly in-flight) value
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Animate toward `target`, starting from the current value.
    ///
    /// Assigning the target already being approached (or already reached)
    /// leaves the animation untouched.
    pub fn set_target(&mut self, target: f32) {
        if target == self.target {
            return;
        }

        tracing::trace!(
            "TimedValue::set_target {:.3} -> {:.3} (from {:.3})",
            self.target,
            target,
            self.value
        );

        self.from = self.value;
        self.target = target;
        self.elapsed_ms = 0.0;

        if self.config.duration_ms == 0 {
            self.settle();
        } else {
            self.running = true;
        }
    }

    /// Advance by `dt_ms`. Returns true while more frames are needed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.running {
            return false;
        }

        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }

        let duration = self.config.duration_ms as f32;
        if self.elapsed_ms >= duration {
            self.settle();
            return false;
        }

        let eased = self.config.easing.apply(self.elapsed_ms / duration);
        let (lo, hi) = (self.from.min(self.target), self.from.max(self.target));
        self.value = (self.from + (self.target - self.from) * eased).clamp(lo, hi);
        true
    }

    fn settle(&mut self) {
        self.value = self.target;
        self.from = self.target;
        self.elapsed_ms = 0.0;
        self.running = false;
    }
}
