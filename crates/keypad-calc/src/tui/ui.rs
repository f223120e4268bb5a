//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::DIVISION_BY_ZERO;

/// Keypad width: four 7-cell buttons plus borders
pub const KEYPAD_WIDTH: u16 = 30;

/// Keypad height: five 2-row buttons plus borders
pub const KEYPAD_HEIGHT: u16 = 12;

/// Display panel height: two lines plus borders
pub const DISPLAY_HEIGHT: u16 = 4;

/// Help sidebar width
pub const HELP_WIDTH: u16 = 24;

/// Title on the outer frame
pub const APP_TITLE: &str = " keypad-calc ";

/// Help entries (key, description)
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Click", "Press button"),
    ("q", "Quit"),
    ("Esc", "Quit"),
    ("Ctrl+C", "Quit"),
];

/// Operators legend
pub const HELP_OPERATORS: &str = "Ops: + - × ÷";

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Display panel
    pub display: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar, if shown
    pub help: Option<Rect>,
}

/// Splits the frame into display, keypad and help regions.
///
/// Rendering and mouse hit-testing both use this so clicks land on what
/// was drawn.
#[must_use]
pub fn screen_layout(area: Rect, show_help: bool) -> ScreenLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Length(KEYPAD_WIDTH),
            Constraint::Min(if show_help { HELP_WIDTH } else { 0 }),
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Length(KEYPAD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    ScreenLayout {
        display: left[0],
        keypad: left[1],
        help: show_help.then_some(columns[1]),
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the two display lines
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.app.display();

        let current_style = if snapshot.current == DIVISION_BY_ZERO {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                snapshot.pending.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(snapshot.current.as_str(), current_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(HELP_OPERATORS, Style::default().fg(Color::Cyan)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = screen_layout(area, self.app.show_help());
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        if let Some(help) = layout.help {
            self.render_help(help, buf);
        }
    }
}
