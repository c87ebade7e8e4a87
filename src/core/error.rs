//! Label parse errors.

use thiserror::Error;

/// A string did not match any canonical label of a closed enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} label '{value}'")]
pub struct ParseLabelError {
    /// Name of the enumeration being parsed (`State` or `Action`).
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}
