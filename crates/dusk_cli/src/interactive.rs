//! Interactive terminal session
//!
//! A reader thread forwards stdin lines over a channel. The frame loop blocks
//! on the channel while the theme is idle, and polls it between frames while
//! a transition is running.

use crate::terminal::TerminalRenderer;
use anyhow::Result;
use dusk_animation::FrameClock;
use dusk_app::ThemeApp;
use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

const HELP: &str = "commands: t/toggle, on, off, show, q/quit";

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Toggle,
    On,
    Off,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "t" | "toggle" => Some(Command::Toggle),
            "on" | "dark" => Some(Command::On),
            "off" | "light" => Some(Command::Off),
            "s" | "show" => Some(Command::Show),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Screen plus the output it draws to
pub struct Session<W: Write> {
    app: ThemeApp,
    renderer: TerminalRenderer,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(app: ThemeApp, renderer: TerminalRenderer, out: W) -> Self {
        Self { app, renderer, out }
    }

    pub fn app(&self) -> &ThemeApp {
        &self.app
    }

    /// Apply one command. Returns false once the session should end.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        let changed = match command {
            Command::Toggle => self.app.toggle(),
            Command::On => self.app.set_switch(true),
            Command::Off => self.app.set_switch(false),
            Command::Show => {
                self.show()?;
                false
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                false
            }
            Command::Quit => return Ok(false),
        };
        if changed {
            writeln!(self.out, "switch {}", self.app.scheme())?;
        }
        Ok(true)
    }

    /// Advance one frame and print its summary if the colors moved. When
    /// the transition finishes, the full view is printed.
    pub fn frame(&mut self, dt_ms: f32) -> Result<bool> {
        let animating = self.app.frame(dt_ms);
        if self.app.theme().needs_repaint() {
            writeln!(self.out, "{}", self.renderer.frame_line(&self.app))?;
            self.app.theme_mut().clear_repaint();
        }
        if !animating {
            self.show()?;
        }
        Ok(animating)
    }

    pub fn show(&mut self) -> Result<()> {
        write!(self.out, "{}", self.renderer.render_view(&self.app.view()))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_app(self) -> ThemeApp {
        self.app
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn handle_line<W: Write>(session: &mut Session<W>, line: &str) -> Result<bool> {
    match Command::parse(line) {
        Some(command) => session.apply(command),
        None => {
            if !line.trim().is_empty() {
                writeln!(session.out, "unknown command {:?}; {HELP}", line.trim())?;
            }
            Ok(true)
        }
    }
}

/// Run until `quit` or end of input
pub fn run<W: Write>(mut session: Session<W>) -> Result<ThemeApp> {
    let input = spawn_stdin_reader();
    let mut clock = FrameClock::new();

    session.show()?;
    writeln!(session.out, "{HELP}")?;

    loop {
        if session.app.theme().is_animating() {
            match input.try_recv() {
                Ok(line) => {
                    if !handle_line(&mut session, &line)? {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => break,
            }
            session.frame(clock.tick())?;
            thread::sleep(clock.frame_interval());
        } else {
            let Ok(line) = input.recv() else { break };
            if !handle_line(&mut session, &line)? {
                break;
            }
            // the loop sat idle, so the first frame starts from now
            clock.reset();
        }
    }

    tracing::debug!(frames = session.app.frame_count(), "interactive session ended");
    Ok(session.into_app())
}
