//! Per-device state machine.

use crate::core::{
    Action, State, TransitionCause, TransitionHistory, TransitionRecord, DEFAULT_HISTORY_CAPACITY,
};
use crate::machine::outcome::ApplyOutcome;
use crate::profile::ProfileId;
use crate::table::TransitionTable;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// State machine of one physical actuator.
///
/// Holds a shared, read-only transition table and the device's own current
/// state. The only ways to change the state are `apply`, which consults the
/// table, and `force`, which does not.
///
/// # Example
///
/// ```rust
/// use actuator_fsm::core::{Action, State};
/// use actuator_fsm::machine::{ApplyOutcome, StateMachine};
/// use actuator_fsm::profile::{ProfileId, ProfileRegistry};
///
/// let table = ProfileRegistry::builtin().get(&ProfileId::Rollershutter).unwrap();
/// let mut machine = StateMachine::new(table);
///
/// assert_eq!(
///     machine.apply(Action::PositionRequestDown),
///     ApplyOutcome::Accepted(State::MovementPositionDown)
/// );
/// assert_eq!(
///     machine.apply(Action::SlatsPosRequest),
///     ApplyOutcome::Rejected {
///         state: State::MovementPositionDown,
///         action: Action::SlatsPosRequest,
///     }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StateMachine {
    table: Arc<TransitionTable>,
    current: State,
    previous: Option<State>,
    history: TransitionHistory,
}

impl StateMachine {
    /// Create a machine in `IDLE` with the default history depth.
    pub fn new(table: Arc<TransitionTable>) -> Self {
        Self::with_history_capacity(table, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a machine in `IDLE` keeping at most `capacity` history records.
    pub fn with_history_capacity(table: Arc<TransitionTable>, capacity: usize) -> Self {
        Self {
            table,
            current: State::INITIAL,
            previous: None,
            history: TransitionHistory::new(capacity),
        }
    }

    /// Feed one action into the machine.
    ///
    /// If the table has a transition for `(current, action)` the machine
    /// moves to its target and the outcome is `Accepted`. Otherwise the
    /// state is left untouched and the outcome is `Rejected`.
    pub fn apply(&mut self, action: Action) -> ApplyOutcome {
        let from = self.current;
        let Some(to) = self.table.lookup(from, action) else {
            debug!(
                profile = %self.table.profile(),
                state = %from,
                action = %action,
                "Transition rejected"
            );
            return ApplyOutcome::Rejected {
                state: from,
                action,
            };
        };

        self.change_state(to, TransitionCause::Action(action));

        if to.is_fault() {
            warn!(
                profile = %self.table.profile(),
                from = %from,
                action = %action,
                "Actuator entered fault state"
            );
        } else {
            debug!(
                profile = %self.table.profile(),
                from = %from,
                action = %action,
                to = %to,
                "Transition accepted"
            );
        }

        ApplyOutcome::Accepted(to)
    }

    /// Overwrite the current state without consulting the table.
    ///
    /// Meant for device bring-up and reconfiguration, where the caller knows
    /// better than the machine what the actuator is doing.
    pub fn force(&mut self, state: State) {
        info!(
            profile = %self.table.profile(),
            from = %self.current,
            to = %state,
            "State forced"
        );
        self.change_state(state, TransitionCause::Forced);
    }

    fn change_state(&mut self, to: State, cause: TransitionCause) {
        let from = self.current;
        self.history.record(TransitionRecord {
            from,
            to,
            cause,
            timestamp: Utc::now(),
        });
        self.previous = Some(from);
        self.current = to;
    }

    /// Get current state (pure)
    #[inline]
    pub fn current_state(&self) -> State {
        self.current
    }

    /// State before the latest accepted or forced change.
    pub fn previous_state(&self) -> Option<State> {
        self.previous
    }

    /// Whether `action` would be accepted right now.
    pub fn accepts(&self, action: Action) -> bool {
        self.table.contains(self.current, action)
    }

    /// Actions the table allows from the current state.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.table.actions_from(self.current).collect()
    }

    /// Whether the machine is in the fault state.
    pub fn is_faulted(&self) -> bool {
        self.current.is_fault()
    }

    pub fn profile(&self) -> &ProfileId {
        self.table.profile()
    }

    pub fn table(&self) -> &Arc<TransitionTable> {
        &self.table
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }
}
