//! Builder for constructing validated transition tables.

use crate::core::{Action, State};
use crate::profile::ProfileId;
use crate::table::error::{ConfigError, DuplicateTransition};
use crate::table::transition::Transition;
use crate::table::TransitionTable;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for transition tables with a fluent API.
///
/// # Example
///
/// ```rust
/// use actuator_fsm::core::{Action, State};
/// use actuator_fsm::profile::ProfileId;
/// use actuator_fsm::table::TransitionTableBuilder;
///
/// let table = TransitionTableBuilder::new(ProfileId::from("AWNING"))
///     .transition(State::Idle, Action::PositionRequestUp, State::MovementPositionUp)
///     .transition(State::MovementPositionUp, Action::PositionDone, State::Idle)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TransitionTableBuilder {
    profile: ProfileId,
    transitions: Vec<Transition>,
}

impl TransitionTableBuilder {
    /// Create a builder for the given profile.
    pub fn new(profile: ProfileId) -> Self {
        Self {
            profile,
            transitions: Vec::new(),
        }
    }

    /// Add a transition from its parts.
    pub fn transition(self, from: State, action: Action, to: State) -> Self {
        self.add_transition(Transition::new(from, action, to))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Validate and build the table.
    ///
    /// Fails if no transitions were added, or with every conflicting
    /// `(from, action)` pair if any key appears more than once.
    pub fn build(self) -> Result<TransitionTable, ConfigError> {
        if self.transitions.is_empty() {
            return Err(ConfigError::EmptyTable {
                profile: self.profile,
            });
        }

        match check_unique_keys(&self.transitions) {
            Validation::Success(_) => Ok(TransitionTable::from_validated(
                self.profile,
                self.transitions,
            )),
            Validation::Failure(conflicts) => Err(ConfigError::DuplicateTransitions {
                profile: self.profile,
                conflicts: conflicts.iter().copied().collect(),
            }),
        }
    }
}

/// Check every transition against the ones declared before it, collecting
/// all conflicts rather than stopping at the first.
fn check_unique_keys(
    transitions: &[Transition],
) -> Validation<(), NonEmptyVec<DuplicateTransition>> {
    let mut seen: HashMap<(State, Action), State> = HashMap::with_capacity(transitions.len());
    let mut checks: Vec<Validation<(), NonEmptyVec<DuplicateTransition>>> = Vec::new();

    for transition in transitions {
        let check = match seen.get(&transition.key()) {
            Some(first) => Validation::fail(DuplicateTransition {
                from: transition.from,
                action: transition.action,
                first: *first,
                second: transition.to,
            }),
            None => {
                seen.insert(transition.key(), transition.to);
                Validation::success(())
            }
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
