//! Theme state holder
//!
//! Owns the active [`ColorScheme`] and the animated progress value that the
//! style derivations read every frame. The only mutator is [`ThemeState::set_dark`];
//! each change retargets the progress animation from wherever it currently is.
//! Frames pull colors with [`ThemeState::styles`] after [`ThemeState::tick`].

use crate::scheme::ColorScheme;
use crate::style::{derive_styles, ThemeStyles};
use dusk_animation::{TimedValue, TimingConfig};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`ThemeState::subscribe`]
    pub struct ListenerId;
}

type Listener = Box<dyn FnMut(ColorScheme)>;

/// Current theme plus its in-flight transition
pub struct ThemeState {
    scheme: ColorScheme,

    /// 0.0 = light, 1.0 = dark
    progress: TimedValue,

    /// Called with the new scheme after every change
    listeners: SlotMap<ListenerId, Listener>,

    /// Set when colors changed since the last frame was drawn
    needs_repaint: bool,
}

impl ThemeState {
    /// Create from the platform-reported scheme, using `fallback` when the
    /// platform has no preference. Progress starts settled on that scheme.
    pub fn new(initial: Option<ColorScheme>, fallback: ColorScheme, timing: TimingConfig) -> Self {
        let scheme = match initial {
            Some(scheme) => scheme,
            None => {
                tracing::debug!("no platform color scheme, falling back to {fallback}");
                fallback
            }
        };

        Self {
            scheme,
            progress: TimedValue::new(scheme.progress(), timing),
            listeners: SlotMap::with_key(),
            needs_repaint: true,
        }
    }

    /// Settled on `scheme` with default timing
    pub fn with_scheme(scheme: ColorScheme) -> Self {
        Self::new(Some(scheme), scheme, TimingConfig::default())
    }

    // ========== Scheme ==========

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    /// Set the scheme from a switch position (`true` = dark).
    ///
    /// Animates toward the new scheme; setting the current scheme is a no-op.
    pub fn set_dark(&mut self, dark: bool) {
        let scheme = ColorScheme::from_dark(dark);
        if scheme == self.scheme {
            return;
        }

        tracing::debug!(
            "ThemeState::set_dark - switching from {} to {} at progress {:.3}",
            self.scheme,
            scheme,
            self.progress.value()
        );

        self.scheme = scheme;
        self.progress.set_target(scheme.progress());
        self.needs_repaint = true;

        for (_, listener) in self.listeners.iter_mut() {
            listener(scheme);
        }
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) {
        self.set_dark(!self.is_dark());
    }

    // ========== Animation ==========

    /// Advance the transition by `dt_ms`. Returns true while more frames are needed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let before = self.progress.value();
        let animating = self.progress.tick(dt_ms);
        let after = self.progress.value();

        if after != before {
            self.needs_repaint = true;
            tracing::trace!("theme tick: progress={after:.3}, animating={animating}");
        }

        animating
    }

    /// In-flight transition progress in 0.0..=1.0
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Colors for the current frame
    pub fn styles(&self) -> ThemeStyles {
        derive_styles(self.progress.value())
    }

    // ========== Listeners ==========

    /// Register a callback invoked with the new scheme after each change
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(ColorScheme) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    // ========== Dirty Flags ==========

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("scheme", &self.scheme)
            .field("progress", &self.progress.value())
            .field("animating", &self.progress.is_animating())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn falls_back_when_platform_is_silent() {
        let state = ThemeState::new(None, ColorScheme::Dark, TimingConfig::default());
        assert_eq!(state.scheme(), ColorScheme::Dark);
        assert_eq!(state.progress(), 1.0);

        let state = ThemeState::new(None, ColorScheme::Light, TimingConfig::default());
        assert_eq!(state.scheme(), ColorScheme::Light);
    }

    #[test]
    fn platform_value_wins_over_fallback() {
        let state = ThemeState::new(
            Some(ColorScheme::Light),
            ColorScheme::Dark,
            TimingConfig::default(),
        );
        assert_eq!(state.scheme(), ColorScheme::Light);
        assert_eq!(state.progress(), 0.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn set_same_scheme_is_noop() {
        let mut state = ThemeState::with_scheme(ColorScheme::Light);
        state.clear_repaint();
        state.set_dark(false);
        assert!(!state.is_animating());
        assert!(!state.needs_repaint());
    }

    #[test]
    fn listeners_see_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = ThemeState::with_scheme(ColorScheme::Light);

        let sink = seen.clone();
        let id = state.subscribe(move |scheme| sink.borrow_mut().push(scheme));

        state.set_dark(true);
        state.set_dark(true);
        state.toggle();
        assert_eq!(*seen.borrow(), vec![ColorScheme::Dark, ColorScheme::Light]);

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.toggle();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn tick_marks_repaint_only_when_progress_moves() {
        let mut state = ThemeState::with_scheme(ColorScheme::Light);
        state.clear_repaint();
        assert!(!state.tick(16.0));
        assert!(!state.needs_repaint());

        state.set_dark(true);
        state.clear_repaint();
        assert!(state.tick(16.0));
        assert!(state.needs_repaint());
    }

    #[test]
    fn reversal_mid_flight_is_continuous() {
        let timing = TimingConfig::new(300, dusk_animation::Easing::Linear);
        let mut state = ThemeState::new(Some(ColorScheme::Light), ColorScheme::Dark, timing);
        state.set_dark(true);
        state.tick(100.0);
        let before = state.progress();

        state.set_dark(false);
        assert_eq!(state.progress(), before);
        assert!(state.tick(1.0));
        let step = (state.progress() - before).abs();
        assert!(step <= 1.0 / 300.0 + 1e-5, "jumped by {step}");
    }
}
