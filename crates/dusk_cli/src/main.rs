//! Dusk CLI
//!
//! Runs the theme screen in a terminal, prints single frames, and drives
//! headless scenarios from JSON files.

mod config;
mod interactive;
mod terminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::DuskConfig;
use dusk_app::{run_loaded_scenario, HeadlessScenario, SystemHost, ThemeApp};
use dusk_theme::ColorScheme;
use interactive::Session;
use std::path::{Path, PathBuf};
use terminal::TerminalRenderer;
use tracing_subscriber::EnvFilter;

/// Animated light/dark theme switch
#[derive(Parser, Debug)]
#[command(name = "dusk")]
#[command(about = "Animated light/dark theme switch for the terminal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./dusk.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start in this scheme instead of the system one
    #[arg(long, global = true)]
    scheme: Option<ColorScheme>,

    /// Disable 24-bit color swatches
    #[arg(long, global = true)]
    no_color: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive session; type commands to flip the switch
    Run,

    /// Print a single frame
    Render {
        /// Transition progress to draw (0 = light, 1 = dark); the switch
        /// shows on from 0.5
        #[arg(long)]
        progress: Option<f32>,
    },

    /// Run a headless scenario file
    Scenario {
        /// Scenario JSON
        file: PathBuf,

        /// Also write the JSON report to this relative path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DuskConfig::load(cli.config.as_deref())?;
    let renderer = if cli.no_color {
        TerminalRenderer::new(false)
    } else {
        TerminalRenderer::from_env()
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&config, cli.scheme, renderer),
        Commands::Render { progress } => cmd_render(&config, cli.scheme, renderer, progress),
        Commands::Scenario { file, report } => {
            cmd_scenario(&config, cli.scheme, &file, report.as_deref())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn mount(config: &DuskConfig, scheme: Option<ColorScheme>) -> Result<ThemeApp> {
    let host = SystemHost::new(config.screen_metrics());
    ThemeApp::mount(&host, config.app_config(scheme)).context("Failed to mount theme screen")
}

fn cmd_run(
    config: &DuskConfig,
    scheme: Option<ColorScheme>,
    renderer: TerminalRenderer,
) -> Result<()> {
    let app = mount(config, scheme)?;
    let stdout = std::io::stdout();
    let app = interactive::run(Session::new(app, renderer, stdout.lock()))?;
    tracing::info!(color_scheme = %app.scheme(), "final scheme");
    Ok(())
}

fn cmd_render(
    config: &DuskConfig,
    scheme: Option<ColorScheme>,
    renderer: TerminalRenderer,
    progress: Option<f32>,
) -> Result<()> {
    let app = mount(config, scheme)?;
    let view = match progress {
        None => app.view(),
        Some(progress) => {
            if !(0.0..=1.0).contains(&progress) {
                anyhow::bail!("--progress must be between 0 and 1, got {progress}");
            }
            app.view_at(progress)
        }
    };
    print!("{}", renderer.render_view(&view));
    Ok(())
}

fn cmd_scenario(
    config: &DuskConfig,
    scheme: Option<ColorScheme>,
    file: &Path,
    report_path: Option<&Path>,
) -> Result<()> {
    let scenario = HeadlessScenario::from_path(file)
        .with_context(|| format!("Failed to load scenario {}", file.display()))?;
    let report = run_loaded_scenario(&scenario, config.app_config(scheme), config.run_config())?;

    println!("{}", report.to_json()?);
    if let Some(path) = report_path {
        report.save(path)?;
    }

    if let Some(failure) = report.failure() {
        anyhow::bail!(
            "scenario {} failed at step {} ({}): {}",
            file.display(),
            failure.step_index,
            failure.assertion,
            failure.message
        );
    }
    Ok(())
}
