//! Accumulator state machine
//!
//! A flat command set over four fields. Every operation either changes the
//! state and reports [`Outcome::Applied`], or leaves it untouched and says
//! why with a [`Rejection`].

use serde::Serialize;

use super::operations::{parse_operand, Operation};

/// Why an operation left the state untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// Current operand already has a decimal point
    DuplicatePoint,
    /// Token was neither a digit nor '.'
    InvalidToken,
    /// No current operand to apply an operator to
    NoOperand,
    /// An operand did not parse as a finite number
    UnparsableOperand,
    /// No operator is pending
    NoOperation,
}

/// Result of a state machine operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// State changed; the display needs a refresh
    Applied,
    /// State unchanged
    Rejected(Rejection),
}

impl Outcome {
    /// Returns true if the state changed
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Calculator accumulator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalcState {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operation>,
    should_reset_display: bool,
}

impl CalcState {
    /// Creates an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number being typed; empty before the first digit
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Left-hand operand captured when the operator was chosen
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// Pending operator
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether the next digit starts a fresh number
    #[must_use]
    pub const fn should_reset_display(&self) -> bool {
        self.should_reset_display
    }

    /// Appends a digit or decimal point to the current operand
    pub fn append_digit_or_point(&mut self, token: char) -> Outcome {
        if !(token.is_ascii_digit() || token == '.') {
            return Outcome::Rejected(Rejection::InvalidToken);
        }

        if self.should_reset_display {
            self.current_operand = token.to_string();
            self.should_reset_display = false;
        } else if token == '.' && self.current_operand.contains('.') {
            return Outcome::Rejected(Rejection::DuplicatePoint);
        } else if self.current_operand == "0" && token != '.' {
            self.current_operand = token.to_string();
        } else {
            self.current_operand.push(token);
        }
        Outcome::Applied
    }

    /// Makes `op` the pending operator, folding any operation already pending
    pub fn choose_operation(&mut self, op: Operation) -> Outcome {
        if self.current_operand.is_empty() {
            return Outcome::Rejected(Rejection::NoOperand);
        }
        if !self.previous_operand.is_empty() {
            // Left-associative chaining; an unparsable fold is simply skipped
            let _ = self.calculate();
        }

        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        self.should_reset_display = false;
        Outcome::Applied
    }

    /// Applies the pending operator to the two operands
    pub fn calculate(&mut self) -> Outcome {
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.previous_operand),
            parse_operand(&self.current_operand),
        ) else {
            return Outcome::Rejected(Rejection::UnparsableOperand);
        };
        let Some(op) = self.operation else {
            return Outcome::Rejected(Rejection::NoOperation);
        };

        self.current_operand = op.apply(lhs, rhs).render();
        self.operation = None;
        self.previous_operand.clear();
        self.should_reset_display = true;
        Outcome::Applied
    }

    /// Resets every field to its initial value
    pub fn clear_all(&mut self) -> Outcome {
        *self = Self::default();
        Outcome::Applied
    }

    /// Drops the last character of the current operand.
    ///
    /// An emptied operand becomes the literal "0", unlike [`clear_all`],
    /// which leaves it empty.
    ///
    /// [`clear_all`]: Self::clear_all
    pub fn delete_last(&mut self) -> Outcome {
        self.current_operand.pop();
        if self.current_operand.is_empty() {
            self.current_operand.push('0');
        }
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DIVISION_BY_ZERO;

    fn typed(digits: &str) -> CalcState {
        let mut state = CalcState::new();
        for c in digits.chars() {
            state.append_digit_or_point(c);
        }
        state
    }

    fn pending(lhs: &str, op: Operation, rhs: &str) -> CalcState {
        let mut state = typed(lhs);
        state.choose_operation(op);
        for c in rhs.chars() {
            state.append_digit_or_point(c);
        }
        state
    }

    // ===== Initial state =====

    #[test]
    fn test_new_is_empty() {
        let state = CalcState::new();
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.operation(), None);
        assert!(!state.should_reset_display());
    }

    // ===== append_digit_or_point =====

    #[test]
    fn test_append_digits() {
        assert_eq!(typed("123").current_operand(), "123");
    }

    #[test]
    fn test_append_replaces_lone_zero() {
        let mut state = typed("0");
        assert_eq!(state.append_digit_or_point('5'), Outcome::Applied);
        assert_eq!(state.current_operand(), "5");
    }

    #[test]
    fn test_append_zero_onto_zero_stays_single() {
        assert_eq!(typed("00").current_operand(), "0");
    }

    #[test]
    fn test_append_point_after_zero() {
        assert_eq!(typed("0.").current_operand(), "0.");
    }

    #[test]
    fn test_append_point_on_empty() {
        assert_eq!(typed(".").current_operand(), ".");
        assert_eq!(typed(".5").current_operand(), ".5");
    }

    #[test]
    fn test_append_duplicate_point_rejected() {
        let mut state = typed("1.5");
        let before = state.clone();
        assert_eq!(
            state.append_digit_or_point('.'),
            Outcome::Rejected(Rejection::DuplicatePoint)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_append_invalid_token_rejected() {
        let mut state = typed("1");
        assert_eq!(
            state.append_digit_or_point('x'),
            Outcome::Rejected(Rejection::InvalidToken)
        );
        assert_eq!(state.current_operand(), "1");
    }

    #[test]
    fn test_append_after_result_starts_fresh() {
        let mut state = pending("2", Operation::Add, "3");
        state.calculate();
        assert!(state.should_reset_display());
        state.append_digit_or_point('9');
        assert_eq!(state.current_operand(), "9");
        assert!(!state.should_reset_display());
    }

    #[test]
    fn test_append_point_after_result_starts_fresh() {
        let mut state = pending("2.5", Operation::Add, "1");
        state.calculate();
        assert_eq!(state.current_operand(), "3.5");
        state.append_digit_or_point('.');
        assert_eq!(state.current_operand(), ".");
    }

    // ===== choose_operation =====

    #[test]
    fn test_choose_operation_moves_operand() {
        let mut state = typed("12");
        assert_eq!(state.choose_operation(Operation::Subtract), Outcome::Applied);
        assert_eq!(state.previous_operand(), "12");
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.operation(), Some(Operation::Subtract));
    }

    #[test]
    fn test_choose_operation_without_operand_is_noop() {
        let mut state = CalcState::new();
        assert_eq!(
            state.choose_operation(Operation::Add),
            Outcome::Rejected(Rejection::NoOperand)
        );
        assert_eq!(state, CalcState::new());
    }

    #[test]
    fn test_choose_operation_twice_without_operand_keeps_first() {
        let mut state = typed("4");
        state.choose_operation(Operation::Add);
        assert!(!state.choose_operation(Operation::Multiply).is_applied());
        assert_eq!(state.operation(), Some(Operation::Add));
        assert_eq!(state.previous_operand(), "4");
    }

    #[test]
    fn test_choose_operation_chains_left_to_right() {
        let mut state = pending("3", Operation::Add, "4");
        state.choose_operation(Operation::Multiply);
        assert_eq!(state.previous_operand(), "7");
        assert_eq!(state.operation(), Some(Operation::Multiply));
        assert_eq!(state.current_operand(), "");
        assert!(!state.should_reset_display());
    }

    #[test]
    fn test_choose_operation_after_result_uses_result() {
        let mut state = pending("6", Operation::Multiply, "7");
        state.calculate();
        state.choose_operation(Operation::Subtract);
        assert_eq!(state.previous_operand(), "42");
        assert!(!state.should_reset_display());
    }

    #[test]
    fn test_choose_operation_with_sentinel_operand() {
        let mut state = pending("1", Operation::Divide, "0");
        state.calculate();
        assert_eq!(state.choose_operation(Operation::Add), Outcome::Applied);
        assert_eq!(state.previous_operand(), DIVISION_BY_ZERO);
    }

    // ===== calculate =====

    #[test]
    fn test_calculate_division() {
        let mut state = pending("6", Operation::Divide, "3");
        assert_eq!(state.calculate(), Outcome::Applied);
        assert_eq!(state.current_operand(), "2");
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.operation(), None);
        assert!(state.should_reset_display());
    }

    #[test]
    fn test_calculate_division_by_zero() {
        let mut state = pending("10", Operation::Divide, "0");
        assert_eq!(state.calculate(), Outcome::Applied);
        assert_eq!(state.current_operand(), DIVISION_BY_ZERO);
        assert_eq!(state.operation(), None);
        assert_eq!(state.previous_operand(), "");
        assert!(state.should_reset_display());
    }

    #[test]
    fn test_calculate_division_by_zero_point_zero() {
        let mut state = pending("10", Operation::Divide, "0.0");
        state.calculate();
        assert_eq!(state.current_operand(), DIVISION_BY_ZERO);
    }

    #[test]
    fn test_calculate_all_operators() {
        let cases = [
            (Operation::Add, "7"),
            (Operation::Subtract, "-1"),
            (Operation::Multiply, "12"),
            (Operation::Divide, "0.75"),
        ];
        for (op, expected) in cases {
            let mut state = pending("3", op, "4");
            state.calculate();
            assert_eq!(state.current_operand(), expected, "3 {op} 4");
        }
    }

    #[test]
    fn test_calculate_missing_rhs_is_noop() {
        let mut state = typed("5");
        state.choose_operation(Operation::Add);
        let before = state.clone();
        assert_eq!(
            state.calculate(),
            Outcome::Rejected(Rejection::UnparsableOperand)
        );
        assert_eq!(state, before);
        assert_eq!(state.operation(), Some(Operation::Add));
    }

    #[test]
    fn test_calculate_lone_point_is_noop() {
        let mut state = pending("5", Operation::Add, ".");
        let before = state.clone();
        assert!(!state.calculate().is_applied());
        assert_eq!(state, before);
    }

    #[test]
    fn test_calculate_without_anything_is_noop() {
        let mut state = typed("5");
        assert_eq!(
            state.calculate(),
            Outcome::Rejected(Rejection::UnparsableOperand)
        );
        assert_eq!(state.current_operand(), "5");
    }

    #[test]
    fn test_calculate_overflow_renders_infinity() {
        let big = "9".repeat(200);
        let mut state = pending(&big, Operation::Multiply, &big);
        assert_eq!(state.calculate(), Outcome::Applied);
        assert_eq!(state.current_operand(), "Infinity");

        // The overflowed result is not a usable operand
        state.choose_operation(Operation::Add);
        state.append_digit_or_point('1');
        assert_eq!(
            state.calculate(),
            Outcome::Rejected(Rejection::UnparsableOperand)
        );
        assert_eq!(state.previous_operand(), "Infinity");
    }

    // ===== clear_all =====

    #[test]
    fn test_clear_all_resets_everything() {
        let mut state = pending("8", Operation::Divide, "2");
        state.calculate();
        assert_eq!(state.clear_all(), Outcome::Applied);
        assert_eq!(state, CalcState::new());
    }

    // ===== delete_last =====

    #[test]
    fn test_delete_last_drops_one_char() {
        let mut state = typed("123");
        state.delete_last();
        assert_eq!(state.current_operand(), "12");
    }

    #[test]
    fn test_delete_last_to_placeholder_zero() {
        let mut state = typed("7");
        state.delete_last();
        assert_eq!(state.current_operand(), "0");
        state.delete_last();
        assert_eq!(state.current_operand(), "0");
    }

    #[test]
    fn test_delete_last_on_empty_gives_zero() {
        let mut state = CalcState::new();
        assert_eq!(state.delete_last(), Outcome::Applied);
        assert_eq!(state.current_operand(), "0");
    }

    #[test]
    fn test_delete_last_then_digit_replaces_zero() {
        let mut state = typed("7");
        state.delete_last();
        state.append_digit_or_point('3');
        assert_eq!(state.current_operand(), "3");
    }

    #[test]
    fn test_delete_last_on_sentinel() {
        let mut state = pending("1", Operation::Divide, "0");
        state.calculate();
        state.delete_last();
        assert_eq!(state.current_operand(), "Error: Division by zer");
    }
}
