//! The state machine engine.
//!
//! - **StateMachine**: one per device; `apply`, `current_state`, `force`
//! - **ApplyOutcome**: `Accepted(state)` or `Rejected { state, action }`
//! - **SharedMachine**: mutex-guarded handle for multi-context access
//!
//! The engine is synchronous and performs no I/O. Whatever decodes device
//! telemetry into actions, and whatever drives the actuator, runs strictly
//! before or after a call into this module.

mod engine;
mod outcome;
mod shared;

pub use engine::StateMachine;
pub use outcome::{ApplyOutcome, IllegalTransition};
pub use shared::SharedMachine;
