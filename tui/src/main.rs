//! MedResearch dashboard: interactive Ratatui TUI
//!
//! A login gate followed by the dashboard shell: six sections in a sidebar,
//! master/detail drill-down for cases and literature, and an alerts screen
//! with a create form. See `ui.rs` for the layout and the footer for keys.
//!
//! Configuration is read from the file named by `MEDRESEARCH_CONFIG`, if set.

mod app;
mod ui;

use std::{io, path::PathBuf, sync::Arc, time::Duration};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use medresearch_config::DashboardConfig;
use medresearch_ref_data::StaticCatalog;

use crate::app::{App, Control};

const CONFIG_ENV: &str = "MEDRESEARCH_CONFIG";

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn load_config() -> io::Result<DashboardConfig> {
    let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    DashboardConfig::load(path.as_deref()).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Fail on a bad config before the terminal is taken over.
    let config = load_config()?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(Arc::new(StaticCatalog::new()), &config);
    let poll = Duration::from_millis(config.ui.poll_ms);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) == Control::Quit {
                    break;
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
