//! actuator-fsm: a data-driven state machine for window-covering actuators
//!
//! Blinds and rollershutters are driven through a one-way confirmation
//! protocol: the controller sends a movement request and later receives a
//! "done" or "fault" report, with no position feedback in between. This crate
//! tracks what the actuator is believed to be doing and decides which
//! requests and reports are legal for the device's profile.
//!
//! # Core Concepts
//!
//! - **State / Action**: closed vocabularies of movement phases and inputs
//! - **TransitionTable**: validated `(state, action) -> state` data per profile
//! - **ProfileRegistry**: built once, hands out shared tables
//! - **StateMachine**: one per device, `apply` / `current_state` / `force`
//! - **SharedMachine**: lock-guarded handle for concurrent callers
//!
//! An illegal action is never an error: `apply` returns
//! `ApplyOutcome::Rejected` and the state stays where it was. Entering the
//! fault state is a separate, explicit `Accepted(State::Invalid)`.
//!
//! # Example
//!
//! ```rust
//! use actuator_fsm::{Action, ApplyOutcome, ProfileId, ProfileRegistry, State};
//!
//! let mut blind = ProfileRegistry::builtin().instantiate(&ProfileId::Blinds)?;
//!
//! assert_eq!(
//!     blind.apply(Action::PositionRequestUp),
//!     ApplyOutcome::Accepted(State::MovementPositionUp)
//! );
//! assert_eq!(
//!     blind.apply(Action::PositionDone),
//!     ApplyOutcome::Accepted(State::PositionReached)
//! );
//!
//! // Not legal here: reported, not raised.
//! let outcome = blind.apply(Action::CalibrationDone);
//! assert!(outcome.is_rejected());
//! assert_eq!(blind.current_state(), State::PositionReached);
//! # Ok::<(), actuator_fsm::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod machine;
pub mod profile;
pub mod table;

// Re-export commonly used types
pub use config::{EngineConfig, ProfileDefinition};
pub use crate::core::{Action, State};
pub use error::{Error, Result};
pub use machine::{ApplyOutcome, IllegalTransition, SharedMachine, StateMachine};
pub use profile::{ProfileId, ProfileRegistry};
pub use table::{ConfigError, Transition, TransitionTable};
