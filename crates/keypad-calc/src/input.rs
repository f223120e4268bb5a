//! Input actions
//!
//! Every button press, whatever its source, becomes one [`InputAction`].
//! Sources that cannot be mapped are ignored.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{CalcError, CalcResult, Operation};

/// A single discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// One of the four operators
    Operator(Operation),
    /// Compute the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last typed character
    Delete,
}

impl InputAction {
    /// Creates a digit action, `None` for anything above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a button's data attributes to an action.
    ///
    /// `number` is the digit or "." carried by number buttons; `action` is
    /// the command name carried by every other button. A number takes
    /// precedence over an action.
    #[must_use]
    pub fn from_button_data(number: Option<&str>, action: Option<&str>) -> Option<Self> {
        if let Some(number) = number {
            let mut chars = number.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Self::from_char(c),
                _ => None,
            };
        }

        match action? {
            "clear" => Some(Self::Clear),
            "delete" => Some(Self::Delete),
            "equals" => Some(Self::Equals),
            "add" => Some(Self::Operator(Operation::Add)),
            "subtract" => Some(Self::Operator(Operation::Subtract)),
            "multiply" => Some(Self::Operator(Operation::Multiply)),
            "divide" => Some(Self::Operator(Operation::Divide)),
            _ => None,
        }
    }

    /// Maps a digit or '.' to its action
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Self::try_from(c).ok()
    }

    /// Maps a button label to an action.
    ///
    /// Accepts the keypad labels plus the ASCII stand-ins `*`, `x` and `/`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(action) = Self::from_char(c) {
                return Some(action);
            }
        }

        if let Ok(op) = label.parse::<Operation>() {
            return Some(Self::Operator(op));
        }

        match label {
            "*" | "x" | "X" => Some(Self::Operator(Operation::Multiply)),
            "/" => Some(Self::Operator(Operation::Divide)),
            "=" => Some(Self::Equals),
            _ if label.eq_ignore_ascii_case("ac") || label.eq_ignore_ascii_case("c") => {
                Some(Self::Clear)
            }
            _ if label.eq_ignore_ascii_case("del") => Some(Self::Delete),
            _ => None,
        }
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

impl TryFrom<char> for InputAction {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        match c {
            '.' => Ok(Self::Point),
            _ => c
                .to_digit(10)
                .map(|d| Self::Digit(d as u8))
                .ok_or(CalcError::InvalidToken(c)),
        }
    }
}

/// Turns command-line tokens into actions.
///
/// A token made only of digits and points expands to one action per
/// character, so `12` presses `1` then `2`. Unknown tokens are skipped.
pub fn parse_script<I, S>(tokens: I) -> Vec<InputAction>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut actions = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }

        if let Some(action) = InputAction::from_label(token) {
            actions.push(action);
        } else if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            actions.extend(token.chars().filter_map(InputAction::from_char));
        } else {
            warn!(token, "ignoring unrecognized button");
        }
    }
    actions
}
