//! Controller: owns the calculator state and its display sink
//!
//! All input goes through [`Controller::dispatch`], which routes the action
//! to the matching state operation and refreshes the sink when the state
//! changed.

use tracing::{debug, trace};

use crate::core::{CalcState, DisplaySink, DisplaySnapshot, Outcome, Rejection};
use crate::input::InputAction;

/// Calculator controller
#[derive(Debug)]
pub struct Controller<S: DisplaySink> {
    state: CalcState,
    sink: S,
}

impl<S: DisplaySink> Controller<S> {
    /// Creates a controller and pushes the initial display
    pub fn new(sink: S) -> Self {
        Self::with_state(CalcState::new(), sink)
    }

    /// Creates a controller around an existing state
    pub fn with_state(state: CalcState, mut sink: S) -> Self {
        sink.refresh(&DisplaySnapshot::of(&state));
        Self { state, sink }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Display snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::of(&self.state)
    }

    /// Display sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable display sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Splits the controller into state and sink
    pub fn into_parts(self) -> (CalcState, S) {
        (self.state, self.sink)
    }

    /// Routes one action to the state machine
    pub fn dispatch(&mut self, action: InputAction) -> Outcome {
        let outcome = match action {
            InputAction::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => self.state.append_digit_or_point(c),
                None => Outcome::Rejected(Rejection::InvalidToken),
            },
            InputAction::Point => self.state.append_digit_or_point('.'),
            InputAction::Operator(op) => self.state.choose_operation(op),
            InputAction::Equals => self.state.calculate(),
            InputAction::Clear => self.state.clear_all(),
            InputAction::Delete => self.state.delete_last(),
        };

        match outcome {
            Outcome::Applied => {
                let snapshot = DisplaySnapshot::of(&self.state);
                debug!(
                    ?action,
                    pending = %snapshot.pending,
                    current = %snapshot.current,
                    "action applied"
                );
                self.sink.refresh(&snapshot);
            }
            Outcome::Rejected(reason) => trace!(?action, ?reason, "action ignored"),
        }
        outcome
    }

    /// Dispatches a sequence of actions, returning how many were applied
    pub fn dispatch_all<I>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = InputAction>,
    {
        actions
            .into_iter()
            .filter(|&action| self.dispatch(action).is_applied())
            .count()
    }
}

impl<S: DisplaySink + Default> Default for Controller<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
