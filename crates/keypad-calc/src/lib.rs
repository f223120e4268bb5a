//! keypad-calc - button-driven four-function calculator
//!
//! The calculator is a small accumulator state machine. Buttons become
//! [`InputAction`](input::InputAction)s, the [`Controller`](controller::Controller)
//! routes them to [`CalcState`](core::CalcState) and pushes a
//! [`DisplaySnapshot`](core::DisplaySnapshot) to its display sink after
//! every change.
//!
//! Chained operators fold left to right with no precedence: `3 + 4 ×`
//! computes `7` before `×` becomes pending. Dividing by zero shows
//! `Error: Division by zero` and the next digit starts a fresh number.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Controller::new(RecordingDisplay::new());
//! calc.dispatch_all(parse_script(["3", "+", "4", "×", "2", "="]));
//!
//! let shown = calc.sink().last().unwrap();
//! assert_eq!(shown.current, "14");
//! assert_eq!(shown.pending, "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod input;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, Verbosity};
    pub use crate::controller::Controller;
    pub use crate::core::{
        format_number, parse_operand, CalcError, CalcResult, CalcState, DisplaySink,
        DisplaySnapshot, Evaluation, Operation, Outcome, RecordingDisplay, Rejection,
        DIVISION_BY_ZERO,
    };
    pub use crate::error::{AppError, AppResult};
    pub use crate::input::{parse_script, InputAction};

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Controller::new(RecordingDisplay::new());
        calc.dispatch(InputAction::Digit(2));
        assert_eq!(calc.snapshot().current, "2");
    }

    #[test]
    fn test_state_direct() {
        let mut state = CalcState::new();
        state.append_digit_or_point('6');
        state.choose_operation(Operation::Divide);
        state.append_digit_or_point('3');
        assert_eq!(state.calculate(), Outcome::Applied);
        assert_eq!(state.current_operand(), "2");
    }

    #[test]
    fn test_operation_direct() {
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), Evaluation::Number(42.0));
        assert_eq!(format_number(42.0), "42");
        assert_eq!(parse_operand("42"), Some(42.0));
    }
}
