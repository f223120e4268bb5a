//! Calculator core: operators, the accumulator state machine and the
//! display contract.
//!
//! Nothing here touches a terminal. The front ends (`tui`, the `press`
//! command) only see [`DisplaySnapshot`]s pushed through a [`DisplaySink`].

pub mod display;
mod operations;
pub mod state;

pub use display::{DisplaySink, DisplaySnapshot, RecordingDisplay};
pub use operations::{format_number, parse_operand, Evaluation, Operation, DIVISION_BY_ZERO};
pub use state::{CalcState, Outcome, Rejection};

use thiserror::Error;

/// Result type for calculator lookups
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised when translating raw input into calculator terms.
///
/// Arithmetic itself never fails: bad operands are silently rejected and
/// division by zero yields the sentinel result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Symbol is not one of the four supported operators
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
    /// Character is neither a digit nor a decimal point
    #[error("Invalid token: {0:?}")]
    InvalidToken(char),
}
