//! A single legal `(state, action) -> state` mapping.

use crate::core::{Action, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable transition triple.
///
/// The `(from, action)` pair is the key a transition table is indexed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: State,
    pub action: Action,
    pub to: State,
}

impl Transition {
    pub const fn new(from: State, action: Action, to: State) -> Self {
        Self { from, action, to }
    }

    /// The lookup key of this transition.
    pub fn key(&self) -> (State, Action) {
        (self.from, self.action)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.action, self.to)
    }
}
