//! Engine configuration
//!
//! Configuration is optional: the built-in profiles and the default history
//! depth work without any file. A document can raise or lower the history
//! depth and add profiles as pure transition data:
//!
//! ```toml
//! history_capacity = 32
//!
//! [[profiles]]
//! name = "AWNING"
//! transitions = [
//!   { from = "IDLE", action = "POSITION_REQUEST_UP", to = "MOVEMENT_POSITION_UP" },
//!   { from = "MOVEMENT_POSITION_UP", action = "POSITION_DONE", to = "IDLE" },
//! ]
//! ```

use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::error::{Error, Result};
use crate::profile::ProfileId;
use crate::table::{ConfigError, Transition, TransitionTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Records kept per machine; 0 disables history
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Profiles in addition to the built-in ones
    #[serde(default)]
    pub profiles: Vec<ProfileDefinition>,
}

/// A profile described as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefinition {
    pub name: ProfileId,
    pub transitions: Vec<Transition>,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            profiles: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        tracing::debug!(
            path = %path.display(),
            profiles = config.profiles.len(),
            "Loaded engine configuration"
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

impl ProfileDefinition {
    /// Validate the definition into a transition table.
    pub fn build(&self) -> std::result::Result<TransitionTable, ConfigError> {
        TransitionTable::new(self.name.clone(), self.transitions.iter().copied())
    }
}
