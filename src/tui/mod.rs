//! Terminal frontend for the tile game.
//!
//! Owns the terminal (alternate screen, raw mode, mouse capture), renders
//! whatever the engine has commanded onto the surface, and feeds key and
//! mouse input back into the session controller.

mod app;
mod surface;
mod ui;

pub use surface::{TerminalSurface, TileElement};

use crate::game::engine::Timing;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;
use tracing::{error, info};

/// Runs the terminal frontend until the user quits.
///
/// Sets up the terminal, drives the frame loop, and restores the terminal on
/// exit — also when the loop errors.
pub async fn run(timing: Timing, prefill: Option<usize>) -> Result<()> {
    info!("starting terminal frontend");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, timing, prefill).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(error) = &result {
        error!(?error, "frontend loop error");
    }
    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    timing: Timing,
    prefill: Option<usize>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut app = App::new(timing, prefill);

    loop {
        app.drain_session();
        terminal.draw(|frame| {
            app.sync_layout(frame.area());
            ui::draw(frame, &app);
        })?;

        // Short poll keeps the loop responsive to engine events between inputs.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            info!("user quit");
            return Ok(());
        }
    }
}
