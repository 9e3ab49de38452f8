mod app;
mod asset;
mod config;
mod fortune;
mod logging;
mod models;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::{ArgAction, Parser};
use config::AppConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fortune::{FortuneTeller, MessageStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "zoltar")]
#[command(version)]
#[command(about = "Ask the terminal fortune teller for your fortune", long_about = None)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
struct Cli {
    /// Print help
    #[arg(short, long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> Result<()> {
    Cli::parse();

    let app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {}",
            e
        );
        AppConfig::default()
    });

    if let Err(e) = logging::init(&app_config) {
        eprintln!("Warning: Logging disabled. Error: {:#}", e);
    }

    let store = MessageStore::embedded()?;
    let rng = StdRng::try_from_os_rng().context("No source of randomness available")?;
    let title_art = asset::load_title_art(Path::new(asset::TITLE_ART_PATH));

    let mut app = App::new(FortuneTeller::new(store, rng), title_art);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        return Err(err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?)?;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
