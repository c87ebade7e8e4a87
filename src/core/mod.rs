//! Core value types of the actuator state machine.
//!
//! This module contains the closed vocabularies the engine works with:
//! - `State`: the believed movement phase of an actuator
//! - `Action`: a request or device-reported event fed into the machine
//! - `TransitionHistory`: a bounded log of recent state changes
//!
//! None of these types carry behavior that the engine branches on. What is
//! legal is decided entirely by transition table data.

#[macro_use]
mod macros;

mod action;
mod error;
mod history;
mod state;

pub use action::Action;
pub use error::ParseLabelError;
pub use history::{
    TransitionCause, TransitionHistory, TransitionRecord, DEFAULT_HISTORY_CAPACITY,
    MAX_HISTORY_CAPACITY,
};
pub use state::State;
