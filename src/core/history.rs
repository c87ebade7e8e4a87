//! Bounded transition history.
//!
//! Every accepted transition and every forced override is recorded with a
//! timestamp. The log is a ring buffer so that a machine living for the
//! whole lifetime of a device never grows without bound.

use super::action::Action;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of records kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 16;

/// Largest history depth a configuration document may request.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

/// What caused a recorded state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionCause {
    /// An action accepted by the transition table.
    Action(Action),
    /// An administrative override via `force`.
    Forced,
}

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use actuator_fsm::core::{Action, State, TransitionCause, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: State::Idle,
///     to: State::MovementPositionUp,
///     cause: TransitionCause::Action(Action::PositionRequestUp),
///     timestamp: Utc::now(),
/// };
/// assert!(!record.is_forced());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: State,
    /// The state being entered
    pub to: State,
    /// Why the change happened
    pub cause: TransitionCause,
    /// When the change was recorded
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub fn is_forced(&self) -> bool {
        matches!(self.cause, TransitionCause::Forced)
    }
}

/// Ordered, bounded history of state changes.
///
/// The oldest record is evicted once `capacity` records are held. A
/// capacity of zero disables recording.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    capacity: usize,
}

impl Default for TransitionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl TransitionHistory {
    /// Create an empty history holding at most `capacity` records.
    ///
    /// Storage grows with the records actually kept, not with `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use actuator_fsm::core::{Action, State, TransitionCause, TransitionHistory, TransitionRecord};
    /// use chrono::Utc;
    ///
    /// let mut history = TransitionHistory::new(4);
    /// history.record(TransitionRecord {
    ///     from: State::Idle,
    ///     to: State::MovementSlats,
    ///     cause: TransitionCause::Action(Action::SlatsPosRequest),
    ///     timestamp: Utc::now(),
    /// });
    /// history.record(TransitionRecord {
    ///     from: State::MovementSlats,
    ///     to: State::Idle,
    ///     cause: TransitionCause::Action(Action::SlatsPosDone),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(
    ///     history.get_path(),
    ///     vec![State::Idle, State::MovementSlats, State::Idle]
    /// );
    /// ```
    pub fn get_path(&self) -> Vec<State> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time between the oldest and the newest retained record.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl DoubleEndedIterator<Item = &TransitionRecord> + '_ {
        self.records.iter()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all records, keeping the capacity.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
