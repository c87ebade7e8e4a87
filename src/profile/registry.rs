//! Registry mapping profile identifiers to their transition tables.

use crate::config::EngineConfig;
use crate::core::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
use crate::error::{Error, Result};
use crate::machine::StateMachine;
use crate::profile::{builtin, ProfileId};
use crate::table::{ConfigError, Transition, TransitionTable};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Fixed mapping from profile to its shared, read-only transition table.
///
/// Tables are validated when they are registered, so a registry never holds
/// an ambiguous profile. Lookups hand out `Arc` clones; every machine of a
/// profile reads the same table.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<ProfileId, Arc<TransitionTable>>,
    history_capacity: usize,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRegistry {
    /// Create a registry with no profiles.
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Create a registry holding `BLINDS` and `ROLLERSHUTTER`.
    pub fn with_builtin_profiles() -> std::result::Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.register_transitions(ProfileId::Blinds, builtin::BLINDS)?;
        registry.register_transitions(ProfileId::Rollershutter, builtin::ROLLERSHUTTER)?;
        Ok(registry)
    }

    /// Process-wide registry of the built-in profiles, built on first use.
    ///
    /// # Example
    ///
    /// ```rust
    /// use actuator_fsm::core::{Action, State};
    /// use actuator_fsm::profile::{ProfileId, ProfileRegistry};
    ///
    /// let blinds = ProfileRegistry::builtin().get(&ProfileId::Blinds).unwrap();
    /// assert_eq!(
    ///     blinds.lookup(State::MovementPositionUp, Action::PositionDone),
    ///     Some(State::PositionReached)
    /// );
    /// ```
    pub fn builtin() -> &'static ProfileRegistry {
        static BUILTIN: OnceLock<ProfileRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::with_builtin_profiles().expect("Built-in profiles should always build")
        })
    }

    /// Built-in profiles plus every profile defined in `config`.
    ///
    /// Fails with `ConfigError::HistoryCapacityTooLarge` when the configured
    /// depth exceeds `MAX_HISTORY_CAPACITY`.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        if config.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryCapacityTooLarge {
                requested: config.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            }
            .into());
        }

        let mut registry =
            Self::with_builtin_profiles()?.with_history_capacity(config.history_capacity);
        for definition in &config.profiles {
            registry.register(definition.build()?)?;
        }
        Ok(registry)
    }

    /// Set the history depth of machines created by `instantiate`.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Add a validated table under its own profile identifier.
    pub fn register(&mut self, table: TransitionTable) -> std::result::Result<(), ConfigError> {
        let profile = table.profile().clone();
        if self.profiles.contains_key(&profile) {
            return Err(ConfigError::DuplicateProfile(profile));
        }

        tracing::debug!(
            profile = %profile,
            transitions = table.len(),
            "Registered profile"
        );
        self.profiles.insert(profile, Arc::new(table));
        Ok(())
    }

    fn register_transitions(
        &mut self,
        profile: ProfileId,
        transitions: &[Transition],
    ) -> std::result::Result<(), ConfigError> {
        self.register(TransitionTable::new(profile, transitions.iter().copied())?)
    }

    /// Shared table of `profile`.
    pub fn get(&self, profile: &ProfileId) -> Result<Arc<TransitionTable>> {
        self.profiles
            .get(profile)
            .cloned()
            .ok_or_else(|| Error::UnknownProfile(profile.clone()))
    }

    /// Create a machine in `IDLE` bound to the table of `profile`.
    pub fn instantiate(&self, profile: &ProfileId) -> Result<StateMachine> {
        let table = self.get(profile)?;
        Ok(StateMachine::with_history_capacity(
            table,
            self.history_capacity,
        ))
    }

    pub fn contains(&self, profile: &ProfileId) -> bool {
        self.profiles.contains_key(profile)
    }

    /// Registered identifiers, in no particular order.
    pub fn profiles(&self) -> impl Iterator<Item = &ProfileId> + '_ {
        self.profiles.keys()
    }

    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
