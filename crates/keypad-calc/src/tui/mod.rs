//! Terminal front end
//!
//! A display panel over a clickable keypad. Input is the mouse; the
//! keyboard only quits.

mod app;
mod events;
mod keypad;
mod ui;

pub use app::{CalculatorApp, PanelDisplay};
pub use events::{AppEvent, EventMapper};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, screen_layout, CalculatorUI, ScreenLayout};

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::AppResult;

/// Raw-mode terminal that restores itself on drop
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_capture: bool,
}

impl TerminalSession {
    fn new(mouse_capture: bool) -> AppResult<Self> {
        enable_raw_mode()?;

        let mut out = io::stdout();
        let entered = if mouse_capture {
            execute!(out, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(out, EnterAlternateScreen)
        };
        if let Err(err) = entered {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self {
                terminal,
                mouse_capture,
            }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let backend = self.terminal.backend_mut();
        let restored = if self.mouse_capture {
            execute!(backend, LeaveAlternateScreen, DisableMouseCapture)
        } else {
            execute!(backend, LeaveAlternateScreen)
        };
        if let Err(err) = restored {
            warn!(%err, "failed to restore terminal");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the interactive calculator until the user quits
pub fn run(config: &AppConfig) -> AppResult<()> {
    if !config.mouse_capture {
        warn!("mouse capture disabled; keypad clicks will not register");
    }

    let mut session = TerminalSession::new(config.mouse_capture)?;
    let mut app = CalculatorApp::with_config(config);
    let mapper = EventMapper::new();
    info!("keypad started");

    while !app.should_quit() {
        session.terminal.draw(|frame| render(&app, frame))?;

        let event = event::read()?;
        let area = session.terminal.get_frame().area();
        app.handle_event(area, mapper.map(&event));
    }

    info!(refreshes = app.refreshes(), "keypad closed");
    Ok(())
}
