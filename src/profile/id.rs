//! Profile identifiers.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifies a device family and therefore its transition graph.
///
/// `BLINDS` and `ROLLERSHUTTER` are built in. Any other name refers to a
/// profile supplied as configuration data. Built-in names are matched
/// case-insensitively.
///
/// # Example
///
/// ```rust
/// use actuator_fsm::profile::ProfileId;
///
/// assert_eq!("blinds".parse::<ProfileId>().unwrap(), ProfileId::Blinds);
/// assert_eq!(ProfileId::from("AWNING"), ProfileId::Custom("AWNING".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProfileId {
    Blinds,
    Rollershutter,
    Custom(String),
}

impl ProfileId {
    /// Identifiers of the profiles shipped with the crate.
    pub const BUILTIN: [ProfileId; 2] = [ProfileId::Blinds, ProfileId::Rollershutter];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Blinds => "BLINDS",
            Self::Rollershutter => "ROLLERSHUTTER",
            Self::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ProfileId {
    fn from(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("BLINDS") {
            Self::Blinds
        } else if name.eq_ignore_ascii_case("ROLLERSHUTTER") {
            Self::Rollershutter
        } else {
            Self::Custom(name.to_string())
        }
    }
}

impl From<String> for ProfileId {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<ProfileId> for String {
    fn from(id: ProfileId) -> Self {
        match id {
            ProfileId::Custom(name) => name,
            builtin => builtin.as_str().to_string(),
        }
    }
}

impl FromStr for ProfileId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
