// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rule table configuration and its storage port.
//!
//! [`RuleTableConfig`] is plain serde data. Where it lives is the caller's
//! business: [`ConfigService`] (de)serializes JSON and delegates bytes to any
//! [`ConfigStore`], such as the filesystem adapter in
//! `echo-prelude-config-fs` or an in-memory fake in tests.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::rule_table::RuleTable;

/// Default storage key for the rule table configuration.
pub const RULE_TABLE_CONFIG_KEY: &str = "rule_table";

/// Sizing for a [`RuleTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTableConfig {
    /// Number of rules in the universe (largest rule index + 1).
    pub universe_size: usize,
}

impl RuleTableConfig {
    /// Rejects configurations that would build an unusable table.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when `universe_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.universe_size == 0 {
            return Err(ConfigError::Invalid(
                "universe_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Well-formed config with values the table cannot be built from.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if
    /// missing or empty.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// Loads the [`RuleTableConfig`] stored under `key` and builds a table.
    ///
    /// A missing key is [`ConfigError::NotFound`] here: a table cannot be
    /// sized without it.
    pub fn load_rule_table(&self, key: &str) -> Result<RuleTable, ConfigError> {
        let config: RuleTableConfig = self.load(key)?.ok_or(ConfigError::NotFound)?;
        RuleTable::from_config(&config)
    }
}
