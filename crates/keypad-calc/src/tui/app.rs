//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::events::AppEvent;
use super::keypad::Keypad;
use super::ui::screen_layout;
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::core::{CalcState, DisplaySink, DisplaySnapshot, Outcome};
use crate::input::InputAction;

/// Display sink that holds the frame the TUI draws
#[derive(Debug, Clone, Default)]
pub struct PanelDisplay {
    latest: DisplaySnapshot,
    refreshes: u64,
}

impl PanelDisplay {
    /// Frame to draw
    #[must_use]
    pub fn latest(&self) -> &DisplaySnapshot {
        &self.latest
    }

    /// Number of refreshes received
    #[must_use]
    pub const fn refreshes(&self) -> u64 {
        self.refreshes
    }
}

impl DisplaySink for PanelDisplay {
    fn refresh(&mut self, snapshot: &DisplaySnapshot) {
        self.latest.clone_from(snapshot);
        self.refreshes += 1;
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    controller: Controller<PanelDisplay>,
    keypad: Keypad,
    show_help: bool,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    /// Creates a calculator app from configuration
    #[must_use]
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            controller: Controller::new(PanelDisplay::default()),
            keypad: Keypad::new(),
            show_help: config.show_help,
            should_quit: false,
        }
    }

    /// Frame shown on the display panel
    #[must_use]
    pub fn display(&self) -> &DisplaySnapshot {
        self.controller.sink().latest()
    }

    /// Number of display refreshes so far
    #[must_use]
    pub fn refreshes(&self) -> u64 {
        self.controller.sink().refreshes()
    }

    /// Calculator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        self.controller.state()
    }

    /// Keypad with its highlight
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the help panel is shown
    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button: highlights it and dispatches its action
    pub fn press(&mut self, action: InputAction) -> Outcome {
        self.keypad.highlight(action);
        self.controller.dispatch(action)
    }

    /// Handles a click at screen position (x, y) given the full frame area
    pub fn click(&mut self, frame_area: Rect, x: u16, y: u16) -> Option<Outcome> {
        let layout = screen_layout(frame_area, self.show_help);
        let index = self.keypad.hit_test(layout.keypad, x, y)?;
        let action = self.keypad.get_button(index)?.action;
        debug!(x, y, button = %action.label(), "keypad click");
        Some(self.press(action))
    }

    /// Applies an application event
    pub fn handle_event(&mut self, frame_area: Rect, event: AppEvent) {
        match event {
            AppEvent::Click { x, y } => {
                let _ = self.click(frame_area, x, y);
            }
            AppEvent::Quit => self.quit(),
            AppEvent::Resize | AppEvent::None => {}
        }
    }
}
