use dusk_animation::{Easing, TimingConfig};
use dusk_theme::{ColorRole, ColorScheme, Palette, ThemeState, ThemeStyles};

fn settle(state: &mut ThemeState) {
    let mut frames = 0;
    while state.tick(16.0) {
        frames += 1;
        assert!(frames < 1_000, "transition never settled");
    }
}

fn assert_styles_in_range(styles: &ThemeStyles) {
    for role in ColorRole::ALL {
        assert!(
            dusk_theme::within_role_range(role, styles.get(role)),
            "{role:?} left the palette range: {}",
            styles.get(role)
        );
    }
}

#[test]
fn toggle_parity_alternates() {
    for initial in [ColorScheme::Light, ColorScheme::Dark] {
        let mut state = ThemeState::with_scheme(initial);
        for n in 1..=9 {
            state.toggle();
            let expected = if n % 2 == 1 { initial.toggle() } else { initial };
            assert_eq!(state.scheme(), expected, "after {n} toggles from {initial}");
        }
    }
}

#[test]
fn switching_to_dark_settles_on_dark_palette() {
    let mut state = ThemeState::with_scheme(ColorScheme::Light);
    assert_eq!(state.styles().background.to_hex_string(), "#f8f8f8");

    state.set_dark(true);
    assert_eq!(state.scheme(), ColorScheme::Dark);
    // colors have not moved yet
    assert_eq!(state.styles(), ThemeStyles::from(Palette::light()));

    state.tick(150.0);
    let midway = state.styles();
    assert_ne!(midway, ThemeStyles::from(Palette::light()));
    assert_ne!(midway, ThemeStyles::from(Palette::dark()));
    assert_styles_in_range(&midway);

    settle(&mut state);
    let settled = state.styles();
    assert_eq!(settled, ThemeStyles::from(Palette::dark()));
    assert_eq!(settled.background.to_hex_string(), "#1e1e1e");
    assert_eq!(settled.text.to_hex_string(), "#f8f8f8");
}

#[test]
fn rapid_toggling_stays_in_range_and_settles() {
    let mut state = ThemeState::with_scheme(ColorScheme::Light);

    // toggle every few frames, well before any transition completes
    for frame in 0..120 {
        if frame % 3 == 0 {
            state.toggle();
        }
        state.tick(16.0);
        assert!((0.0..=1.0).contains(&state.progress()));
        assert_styles_in_range(&state.styles());
    }

    state.set_dark(false);
    state.set_dark(true);
    settle(&mut state);

    assert_eq!(state.scheme(), ColorScheme::Dark);
    assert_eq!(state.progress(), 1.0);
    assert_eq!(state.styles(), ThemeStyles::from(Palette::dark()));
}

#[test]
fn reversal_continues_from_in_flight_color() {
    let timing = TimingConfig::new(300, Easing::Linear);
    let mut state = ThemeState::new(Some(ColorScheme::Light), ColorScheme::Dark, timing);

    state.set_dark(true);
    state.tick(100.0);
    let before = state.styles();

    state.set_dark(false);
    assert_eq!(state.styles(), before, "retargeting must not jump");

    state.tick(16.0);
    let after = state.styles();
    // heading back toward light: background gets brighter again
    assert!(after.background.r > before.background.r);
}

#[test]
fn scheme_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ColorScheme::Dark).unwrap(),
        "\"dark\""
    );
    let parsed: ColorScheme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, ColorScheme::Light);
}
