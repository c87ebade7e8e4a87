//! Immutable, validated transition tables.
//!
//! A table is the complete behavior of one profile. It is built once from a
//! literal list of transitions, checked for duplicate `(from, action)` keys,
//! and then only ever read. Machines share it through an `Arc`.

mod builder;
mod error;
mod transition;

pub use builder::TransitionTableBuilder;
pub use error::{ConfigError, DuplicateTransition};
pub use transition::Transition;

use crate::core::{Action, State};
use crate::profile::ProfileId;

/// Dense `[state][action]` index into target states.
type Index = [[Option<State>; Action::COUNT]; State::COUNT];

/// The validated transition graph of one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTable {
    profile: ProfileId,
    transitions: Vec<Transition>,
    index: Index,
}

impl TransitionTable {
    /// Build a table from a list of transitions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use actuator_fsm::core::{Action, State};
    /// use actuator_fsm::profile::ProfileId;
    /// use actuator_fsm::table::{Transition, TransitionTable};
    ///
    /// let table = TransitionTable::new(
    ///     ProfileId::from("PERGOLA"),
    ///     [Transition::new(State::Idle, Action::SlatsPosRequest, State::MovementSlats)],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     table.lookup(State::Idle, Action::SlatsPosRequest),
    ///     Some(State::MovementSlats)
    /// );
    /// assert_eq!(table.lookup(State::Idle, Action::PositionDone), None);
    /// ```
    pub fn new<I>(profile: ProfileId, transitions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Transition>,
    {
        TransitionTableBuilder::new(profile)
            .transitions(transitions)
            .build()
    }

    /// Start a fluent builder for `profile`.
    pub fn builder(profile: ProfileId) -> TransitionTableBuilder {
        TransitionTableBuilder::new(profile)
    }

    /// Callers must have checked key uniqueness.
    pub(crate) fn from_validated(profile: ProfileId, transitions: Vec<Transition>) -> Self {
        let mut index: Index = [[None; Action::COUNT]; State::COUNT];
        for t in &transitions {
            index[t.from.index()][t.action.index()] = Some(t.to);
        }
        Self {
            profile,
            transitions,
            index,
        }
    }

    /// Target state for `action` taken in `state`, if the pair is legal.
    #[inline]
    pub fn lookup(&self, state: State, action: Action) -> Option<State> {
        self.index[state.index()][action.index()]
    }

    pub fn contains(&self, state: State, action: Action) -> bool {
        self.lookup(state, action).is_some()
    }

    /// Actions legal from `state`, in `Action` declaration order.
    pub fn actions_from(&self, state: State) -> impl Iterator<Item = Action> + '_ {
        Action::ALL
            .iter()
            .copied()
            .filter(move |action| self.contains(state, *action))
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn profile(&self) -> &ProfileId {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shutter() -> TransitionTable {
        TransitionTable::builder(ProfileId::from("SHUTTER"))
            .transition(State::Idle, Action::PositionRequestUp, State::MovementPositionUp)
            .transition(State::Idle, Action::PositionRequestDown, State::MovementPositionDown)
            .transition(State::MovementPositionUp, Action::PositionDone, State::Idle)
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_finds_declared_transitions() {
        let table = shutter();
        for t in table.transitions() {
            assert_eq!(table.lookup(t.from, t.action), Some(t.to));
        }
    }

    #[test]
    fn lookup_misses_undeclared_pairs() {
        let table = shutter();
        let declared = table.len();
        let misses = State::ALL
            .iter()
            .flat_map(|s| Action::ALL.iter().map(move |a| (*s, *a)))
            .filter(|(s, a)| table.lookup(*s, *a).is_none())
            .count();

        assert_eq!(misses, State::COUNT * Action::COUNT - declared);
    }

    #[test]
    fn actions_from_lists_legal_actions() {
        let table = shutter();
        let from_idle: Vec<Action> = table.actions_from(State::Idle).collect();
        assert_eq!(
            from_idle,
            vec![Action::PositionRequestUp, Action::PositionRequestDown]
        );
        assert_eq!(table.actions_from(State::Invalid).count(), 0);
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let table = shutter();
        assert_eq!(table.transitions()[0].action, Action::PositionRequestUp);
        assert_eq!(table.transitions()[2].from, State::MovementPositionUp);
        assert!(!table.is_empty());
    }

    #[test]
    fn new_propagates_validation_errors() {
        let result = TransitionTable::new(ProfileId::from("EMPTY"), Vec::<Transition>::new());
        assert!(matches!(result, Err(ConfigError::EmptyTable { .. })));
    }
}
