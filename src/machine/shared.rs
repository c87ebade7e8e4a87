//! Lock-guarded handle for machines touched from several contexts.
//!
//! A device's machine is typically reached both from the inbound telemetry
//! path (completion and fault reports) and from the outbound command path.
//! `SharedMachine` serialises those accesses per device. Different devices
//! never contend because each owns its own lock.

use crate::core::{Action, State, TransitionHistory};
use crate::machine::engine::StateMachine;
use crate::machine::outcome::ApplyOutcome;
use crate::profile::ProfileId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one `StateMachine`.
///
/// Every method holds the lock for the duration of that call only. Use
/// `with` when a check and an update must happen atomically.
///
/// # Example
///
/// ```rust
/// use actuator_fsm::core::{Action, State};
/// use actuator_fsm::machine::SharedMachine;
/// use actuator_fsm::profile::{ProfileId, ProfileRegistry};
///
/// let machine = ProfileRegistry::builtin().instantiate(&ProfileId::Blinds).unwrap();
/// let commands = SharedMachine::new(machine);
/// let telemetry = commands.clone();
///
/// let _ = commands.apply(Action::PositionRequestUp);
/// let _ = telemetry.apply(Action::PositionDone);
/// assert_eq!(commands.current_state(), State::PositionReached);
/// ```
#[derive(Debug, Clone)]
pub struct SharedMachine {
    inner: Arc<Mutex<StateMachine>>,
}

impl SharedMachine {
    pub fn new(machine: StateMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// See `StateMachine::apply`.
    pub fn apply(&self, action: Action) -> ApplyOutcome {
        self.inner.lock().apply(action)
    }

    pub fn current_state(&self) -> State {
        self.inner.lock().current_state()
    }

    /// See `StateMachine::force`.
    pub fn force(&self, state: State) {
        self.inner.lock().force(state);
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        self.inner.lock().legal_actions()
    }

    pub fn profile(&self) -> ProfileId {
        self.inner.lock().profile().clone()
    }

    /// Copy of the machine's history at this instant.
    pub fn history(&self) -> TransitionHistory {
        self.inner.lock().history().clone()
    }

    /// Run `f` with exclusive access to the machine.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateMachine) -> R) -> R {
        let mut machine = self.inner.lock();
        f(&mut *machine)
    }
}

impl From<StateMachine> for SharedMachine {
    fn from(machine: StateMachine) -> Self {
        Self::new(machine)
    }
}
