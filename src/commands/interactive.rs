//! Interactive command implementation
//!
//! Runs the planner form in the terminal's alternate screen until the user
//! quits.

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::Path};
use tracing::info;

use ice_planner::{config, planner_from_config, ui::PlannerApp, CostDisplay};

/// Execute the interactive command
pub fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let planner = planner_from_config(&cfg);
    let display = CostDisplay::new(cfg.display.currency_symbol.clone());

    info!(team = planner.team_name(), "Starting interactive planner");
    run_form(PlannerApp::new(planner, display))
}

/// Event loop: one key, one recomputation, one redraw
fn run_form(mut app: PlannerApp) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let result = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e.into());
        }

        // Blocks until the next event; there is no background work to wake for
        match event::read() {
            Ok(Event::Key(key)) => {
                if app.handle_key(key) {
                    break Ok(());
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let params = app.planner().params();
    info!(
        players = params.players,
        total = app.planner().result().total,
        "Interactive planner closed"
    );

    result
}
