//! Terminal UI for Strictly Chess.
//!
//! Single-threaded: one blocking read per terminal event, each handled to
//! completion before the next redraw.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{move_cursor, BoardGeometry};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::UiConfig;

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &UiConfig) -> Result<()> {
    info!("Starting Strictly Chess TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &UiConfig,
) -> Result<()> {
    loop {
        let mut geometry = None;
        terminal.draw(|frame| geometry = Some(draw(frame, &app, config)))?;
        if let Some(geometry) = geometry {
            app.set_geometry(geometry);
        }

        let event = event::read()?;
        app.handle_event(&event);

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
