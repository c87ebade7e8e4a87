//! Result of feeding one action into a machine.

use crate::core::{Action, State};
use thiserror::Error;

/// Outcome of `StateMachine::apply`.
///
/// A rejection is the normal response to an action that is not legal in
/// the current state. It is not an error and the state did not change.
/// A fault is an *accepted* transition into `INVALID`.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The table had a transition; the machine is now in this state.
    Accepted(State),

    /// No transition for `(state, action)`; the machine stayed in `state`.
    Rejected { state: State, action: Action },
}

/// An action was not legal from the state the machine was in.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Action {action} is not legal in state {state}")]
pub struct IllegalTransition {
    pub state: State,
    pub action: Action,
}

impl ApplyOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Whether the action moved the machine into the fault state.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Accepted(state) if state.is_fault())
    }

    /// State of the machine after the action, whether accepted or not.
    pub fn state(&self) -> State {
        match self {
            Self::Accepted(state) | Self::Rejected { state, .. } => *state,
        }
    }

    /// Convert a rejection into an error value.
    pub fn into_result(self) -> Result<State, IllegalTransition> {
        match self {
            Self::Accepted(state) => Ok(state),
            Self::Rejected { state, action } => Err(IllegalTransition { state, action }),
        }
    }
}
