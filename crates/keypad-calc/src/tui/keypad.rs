//! Clickable keypad for the TUI
//!
//! The grid mirrors a pocket calculator:
//!
//! ```text
//! [AC] [DEL] [÷] [×]
//! [ 7] [ 8 ] [9] [-]
//! [ 4] [ 5 ] [6] [+]
//! [ 1] [ 2 ] [3] [=]
//!      [ 0 ] [.]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operation;
use crate::input::InputAction;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// What pressing the button does
    pub action: InputAction,
    /// Whether the button is highlighted as the last one pressed
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button
    #[must_use]
    pub const fn new(action: InputAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }

    /// Text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad grid; empty cells are `None`
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Cells in row-major order
    cells: Vec<Option<KeypadButton>>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use InputAction::{Clear, Delete, Digit, Equals, Operator, Point};

        let layout = [
            // Row 1: AC DEL ÷ ×
            Some(Clear),
            Some(Delete),
            Some(Operator(Operation::Divide)),
            Some(Operator(Operation::Multiply)),
            // Row 2: 7 8 9 -
            Some(Digit(7)),
            Some(Digit(8)),
            Some(Digit(9)),
            Some(Operator(Operation::Subtract)),
            // Row 3: 4 5 6 +
            Some(Digit(4)),
            Some(Digit(5)),
            Some(Digit(6)),
            Some(Operator(Operation::Add)),
            // Row 4: 1 2 3 =
            Some(Digit(1)),
            Some(Digit(2)),
            Some(Digit(3)),
            Some(Equals),
            // Row 5: 0 .
            None,
            Some(Digit(0)),
            Some(Point),
            None,
        ];

        Self {
            cells: layout
                .into_iter()
                .map(|cell| cell.map(KeypadButton::new))
                .collect(),
            cols: 4,
            rows: 5,
        }
    }

    /// Number of buttons (empty cells excluded)
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button at a cell index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.get_button(row * self.cols + col)
        } else {
            None
        }
    }

    /// Cell index of the button performing `action`
    #[must_use]
    pub fn find_button(&self, action: InputAction) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|b| b.action == action))
    }

    /// Highlights the button at `index`, releasing all others
    pub fn press_button(&mut self, index: usize) {
        self.release_all();
        if let Some(Some(btn)) = self.cells.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in self.cells.iter_mut().flatten() {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for an action
    pub fn highlight(&mut self, action: InputAction) {
        match self.find_button(action) {
            Some(index) => self.press_button(index),
            None => self.release_all(),
        }
    }

    /// Index of the highlighted button
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|b| b.pressed))
    }

    /// Buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|btn| ((i / cols, i % cols), btn)))
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell wide on every side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        if row < self.rows && col < self.cols {
            let index = row * self.cols + col;
            self.get_button(index).map(|_| index)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.action {
        InputAction::Digit(_) | InputAction::Point => Style::default().fg(Color::White),
        InputAction::Operator(_) => Style::default().fg(Color::Yellow),
        InputAction::Equals => Style::default().fg(Color::Green),
        InputAction::Clear | InputAction::Delete => Style::default().fg(Color::Red),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", btn.label());
            let label_width = label.chars().count() as u16;
            if label_width > btn_width {
                continue;
            }
            let label_x = x + (btn_width - label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, button_style(btn)),
                    btn_width,
                );
            }
        }
    }
}
