//! Binary operators, operand parsing and result formatting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Text shown in place of a result when dividing by zero
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero";

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol shown on the button and in the pending line
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Looks up an operator by its display symbol
    pub fn from_symbol(symbol: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| CalcError::UnknownOperator(symbol.to_string()))
    }

    /// Applies the operator to two operands
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> Evaluation {
        match self {
            Self::Add => Evaluation::Number(lhs + rhs),
            Self::Subtract => Evaluation::Number(lhs - rhs),
            Self::Multiply => Evaluation::Number(lhs * rhs),
            // -0.0 == 0.0, so negative zero is caught as well
            Self::Divide if rhs == 0.0 => Evaluation::DivisionByZero,
            Self::Divide => Evaluation::Number(lhs / rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// Result of applying an [`Operation`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// Plain arithmetic result (may be non-finite on overflow)
    Number(f64),
    /// Right-hand operand was zero in a division
    DivisionByZero,
}

impl Evaluation {
    /// Renders the evaluation as the text that becomes the current operand
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Number(value) => format_number(*value),
            Self::DivisionByZero => DIVISION_BY_ZERO.to_string(),
        }
    }

    /// Returns true for the division-by-zero sentinel
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}

/// Parses the longest leading decimal literal of an operand.
///
/// Trailing text is ignored, so a result shortened by delete still reads
/// as a number ("1e+" is 1, "1.5e-" is 1.5). Returns `None` when no digits
/// lead the string, and for non-finite values.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let literal = &text[..leading_literal_len(text.as_bytes())];
    if literal.is_empty() {
        return None;
    }
    literal
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Byte length of `[sign] digits [. digits] [e [sign] digits]` at the start
/// of `bytes`, or 0 if there is no mantissa digit.
fn leading_literal_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

/// Formats a number the way it is shown on the calculator display.
///
/// Shortest round-trip digits; fixed notation for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with an explicit sign outside it.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}
