//! Device profiles and the registry that serves them.
//!
//! A profile is nothing but transition data. Adding a device family means
//! adding a table, either in `builtin` or through configuration; the engine
//! itself has no per-profile branches.

pub mod builtin;
mod id;
mod registry;

pub use id::ProfileId;
pub use registry::ProfileRegistry;
