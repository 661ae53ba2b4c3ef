mod app;
mod config;
mod error;
mod events;
mod gemini;
mod recommend;
mod song;
mod ui;
#[cfg(test)]
mod tests;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    app::App,
    config::Config,
    gemini::GeminiClient,
    recommend::Recommender,
};

const LOG_PATH: &str = "/tmp/commute-beat.log";

#[tokio::main]
async fn main() -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("commute_beat=info"));
    // Write logs to file so they don't corrupt the TUI
    let log_file = std::fs::File::create(LOG_PATH).ok();
    if let Some(file) = log_file {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    }

    // ── Load config ──────────────────────────────────────────────────────────
    let config = Config::load()?;
    info!("Using model {} ({} mix)", config.model, config.mix);
    let recommender = Recommender::new(GeminiClient::new(&config), config.mix);

    // ── Terminal setup ────────────────────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // ── Panic hook to restore terminal on crash ──────────────────────────────
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
        original_hook(panic_info);
    }));

    // ── Run the app ──────────────────────────────────────────────────────────
    let result = {
        let mut app = App::new(recommender);
        app.run(&mut terminal).await
    };

    // ── Restore terminal ─────────────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("App error: {e:?}");
        eprintln!("\n\x1b[31mcommute-beat crashed:\x1b[0m {e}");
        eprintln!("Check {LOG_PATH} for details");
    }

    Ok(())
}
