//! Terminal rendering of the theme screen
//!
//! Each node becomes one line with a 24-bit color swatch. Without color the
//! swatch is dropped and only the hex value is printed.

use dusk_app::{NodeKind, ThemeApp, ViewNode, ViewTree};
use dusk_core::Color;
use nu_ansi_term::{Color as AnsiColor, Style};
use std::fmt::Write;

const SWATCH: &str = "    ";

#[derive(Clone, Copy, Debug)]
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors unless `NO_COLOR` is set
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    pub fn swatch(&self, color: Color) -> String {
        if !self.color {
            return String::new();
        }
        let [r, g, b, _] = color.to_rgba8();
        format!(
            "{} ",
            Style::new().on(AnsiColor::Rgb(r, g, b)).paint(SWATCH)
        )
    }

    /// Whole view tree, indented by depth
    pub fn render_view(&self, view: &ViewTree) -> String {
        let mut out = String::new();
        for (node, depth) in view.nodes() {
            let _ = writeln!(
                out,
                "{:indent$}{}{:<13} {}",
                "",
                self.swatch(node.color()),
                node.id,
                describe(node),
                indent = depth * 2
            );
        }
        out
    }

    /// One-line summary of a frame in flight
    pub fn frame_line(&self, app: &ThemeApp) -> String {
        let styles = app.theme().styles();
        format!(
            "frame {:>4}  {:>5.0}ms  progress {:.3}  bg {}{}  text {}{}  circle {}{}",
            app.frame_count(),
            app.elapsed_ms(),
            app.theme().progress(),
            self.swatch(styles.background),
            styles.background.to_hex_string(),
            self.swatch(styles.text),
            styles.text.to_hex_string(),
            self.swatch(styles.circle),
            styles.circle.to_hex_string(),
        )
    }
}

fn describe(node: &ViewNode) -> String {
    match &node.kind {
        NodeKind::Container { background } => background.to_hex_string(),
        NodeKind::Text {
            content,
            color,
            style,
        } => format!(
            "{} \"{}\" size {} weight {}",
            color.to_hex_string(),
            content,
            style.font_size,
            style.font_weight
        ),
        NodeKind::Circle {
            diameter,
            elevation,
            background,
            ..
        } => format!(
            "{} diameter {:.0} elevation {}",
            background.to_hex_string(),
            diameter,
            elevation
        ),
        NodeKind::Switch { value, track, .. } => format!(
            "{} {}",
            track.to_hex_string(),
            if *value { "on" } else { "off" }
        ),
    }
}
