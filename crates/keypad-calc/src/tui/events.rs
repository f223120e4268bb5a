//! Terminal event mapping
//!
//! Calculator entry happens by clicking keypad buttons; the keyboard only
//! quits the application.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the application should do with a terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Left click at a screen position
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Terminal was resized; redraw
    Resize,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps crossterm events to application events
#[derive(Debug, Default)]
pub struct EventMapper;

impl EventMapper {
    /// Creates a new event mapper
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a terminal event
    #[must_use]
    pub fn map(&self, event: &Event) -> AppEvent {
        match event {
            Event::Key(key) => self.map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse),
            Event::Resize(..) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Maps a key event; only quit keys are recognized
    #[must_use]
    pub fn map_key(&self, key: &KeyEvent) -> AppEvent {
        if key.kind == KeyEventKind::Release {
            return AppEvent::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            _ => AppEvent::None,
        }
    }

    /// Maps a mouse event; only left-button presses count
    #[must_use]
    pub fn map_mouse(&self, mouse: &MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                x: mouse.column,
                y: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}
