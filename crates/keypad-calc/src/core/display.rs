//! Display contract
//!
//! The calculator has two visible lines: the pending operation above and
//! the current operand below. [`DisplaySnapshot`] is what a renderer gets
//! after every state change.

use serde::{Deserialize, Serialize};

use super::state::CalcState;

/// Text of both display lines at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Pending-operation line, e.g. "12 ×"; empty when nothing is pending
    pub pending: String,
    /// Current operand line; "0" before any digit is entered
    pub current: String,
}

impl DisplaySnapshot {
    /// Builds the snapshot for a state
    #[must_use]
    pub fn of(state: &CalcState) -> Self {
        let current = if state.current_operand().is_empty() {
            "0".to_string()
        } else {
            state.current_operand().to_string()
        };
        let pending = state
            .operation()
            .map(|op| format!("{} {}", state.previous_operand(), op.symbol()))
            .unwrap_or_default();

        Self { pending, current }
    }
}

impl From<&CalcState> for DisplaySnapshot {
    fn from(state: &CalcState) -> Self {
        Self::of(state)
    }
}

/// Receives display refreshes from the controller
pub trait DisplaySink {
    /// Pushes the latest display contents
    fn refresh(&mut self, snapshot: &DisplaySnapshot);
}

/// Sink that keeps every frame it was given
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    frames: Vec<DisplaySnapshot>,
}

impl RecordingDisplay {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames in order
    #[must_use]
    pub fn frames(&self) -> &[DisplaySnapshot] {
        &self.frames
    }

    /// Most recent frame
    #[must_use]
    pub fn last(&self) -> Option<&DisplaySnapshot> {
        self.frames.last()
    }

    /// Number of refreshes received
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no refresh was received yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl DisplaySink for RecordingDisplay {
    fn refresh(&mut self, snapshot: &DisplaySnapshot) {
        self.frames.push(snapshot.clone());
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn refresh(&mut self, snapshot: &DisplaySnapshot) {
        (**self).refresh(snapshot);
    }
}
