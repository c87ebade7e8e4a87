//! Crate-level error type.
//!
//! Running machines never produce these: an illegal action is an ordinary
//! `ApplyOutcome::Rejected`. Errors here come from building profiles,
//! loading configuration, and looking up profiles at device bring-up.

use crate::core::ParseLabelError;
use crate::profile::ProfileId;
use crate::table::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Registry lookup for an identifier that was never registered
    #[error("Unknown profile '{0}'")]
    UnknownProfile(ProfileId),

    /// Invalid transition data or profile registration
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed configuration document or label
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error means the profile is not known to the registry.
    pub fn is_unknown_profile(&self) -> bool {
        matches!(self, Error::UnknownProfile(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(format!("TOML error: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(format!("JSON error: {err}"))
    }
}

impl From<ParseLabelError> for Error {
    fn from(err: ParseLabelError) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_message_names_profile() {
        let err = Error::UnknownProfile(ProfileId::from("AWNING"));
        assert_eq!(err.to_string(), "Unknown profile 'AWNING'");
        assert!(err.is_unknown_profile());
    }

    #[test]
    fn config_error_is_transparent() {
        let err: Error = ConfigError::DuplicateProfile(ProfileId::Blinds).into();
        assert_eq!(err.to_string(), "Profile 'BLINDS' is already registered");
        assert!(!err.is_unknown_profile());
    }

    #[test]
    fn label_errors_become_parse_errors() {
        let err: Error = "HOVER".parse::<crate::core::Action>().unwrap_err().into();
        assert!(matches!(err, Error::Parse(ref msg) if msg == "Unknown Action label 'HOVER'"));
    }
}
