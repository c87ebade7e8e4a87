//! Construction-time errors for transition tables and profiles.

use crate::core::{Action, State};
use crate::profile::ProfileId;
use thiserror::Error;

/// Two transitions of one table share the same `(from, action)` key.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("({from}, {action}) maps to both {first} and {second}")]
pub struct DuplicateTransition {
    pub from: State,
    pub action: Action,
    /// Target of the transition declared first
    pub first: State,
    /// Target of the conflicting transition declared later
    pub second: State,
}

/// Errors that make a profile unusable. Raised only while building tables
/// or registering profiles, never while a machine is running.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Profile '{profile}' defines no transitions")]
    EmptyTable { profile: ProfileId },

    #[error("Profile '{profile}' has conflicting transitions: {}", describe(.conflicts))]
    DuplicateTransitions {
        profile: ProfileId,
        conflicts: Vec<DuplicateTransition>,
    },

    #[error("Profile '{0}' is already registered")]
    DuplicateProfile(ProfileId),

    #[error("History capacity {requested} exceeds the maximum of {max}")]
    HistoryCapacityTooLarge { requested: usize, max: usize },
}

fn describe(conflicts: &[DuplicateTransition]) -> String {
    conflicts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
