mod app;
mod config;
mod gpa;
mod grades;
mod keymap;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "gpacal")]
#[command(about = "GPA calculator for the terminal")]
#[command(version)]
struct Cli {
    /// Config file path (defaults to the user config dir)
    #[arg(long)]
    config: Option<String>,

    /// Start in dark mode
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gpacal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().display().to_string());
    let mut config = Config::load(&config_path)?;
    if cli.dark {
        config.appearance.dark_mode = true;
    } else if cli.light {
        config.appearance.dark_mode = false;
    }
    tracing::info!(
        "Starting with {} course(s), dark mode {}",
        config.initial_courses(),
        config.appearance.dark_mode
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if result.is_ok() {
        tracing::info!("Final {}", gpa::format_gpa(app.gpa()));
    }
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let action = keymap::map_key(key, app.key_context());
                tracing::trace!("{:?} -> {:?}", key.code, action);
                app.apply(action);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
