//! Terminal UI for the arcade.
//!
//! A single-threaded tick loop: draw, poll input for up to 50ms, feed
//! the elapsed time into the app. Every game timer advances from this
//! one loop, so leaving a game (which drops its session) can never
//! leave a timer running behind the scenes.

pub mod app;
mod input;
mod ui;
mod views;

use crate::config::ArcadeConfig;
use crate::rng::ArcadeRng;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

const TICK: Duration = Duration::from_millis(50);

/// Runs the arcade until the user quits.
#[instrument(skip_all, fields(player_a = %config.player_a(), player_b = %config.player_b()))]
pub fn run(config: ArcadeConfig, rng: ArcadeRng) -> Result<()> {
    info!("Starting arcade TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, App::new(config, rng));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "arcade loop error");
    }
    res
}

fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut last_tick = Instant::now();
    while !app.should_quit() {
        terminal.draw(|frame| views::draw(frame, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        let now = Instant::now();
        app.advance(now - last_tick);
        last_tick = now;
    }
    info!("User quit");
    Ok(())
}
