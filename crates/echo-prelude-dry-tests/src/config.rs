// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use echo_prelude::config::{ConfigError, ConfigStore, RuleTableConfig, RULE_TABLE_CONFIG_KEY};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share state, so a test can hand one clone to a
/// [`ConfigService`](echo_prelude::ConfigService) and inspect call counts or
/// flip failure injection through another.
///
/// # Example
///
/// ```
/// use echo_prelude::ConfigService;
/// use echo_prelude_dry_tests::InMemoryConfigStore;
///
/// let store = InMemoryConfigStore::with_rule_table(16);
/// let service = ConfigService::new(store.clone());
///
/// let table = service.load_rule_table("rule_table").unwrap();
/// assert_eq!(table.universe_size(), 16);
/// assert_eq!(store.load_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty in-memory config store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a [`RuleTableConfig`] under
    /// [`RULE_TABLE_CONFIG_KEY`].
    pub fn with_rule_table(universe_size: usize) -> Self {
        let store = Self::new();
        let bytes = serde_json::to_vec(&RuleTableConfig { universe_size }).unwrap_or_default();
        store.lock().data.insert(RULE_TABLE_CONFIG_KEY.to_owned(), bytes);
        store
    }

    /// Create a store holding `raw` verbatim under `key`.
    pub fn with_raw(key: &str, raw: &[u8]) -> Self {
        let store = Self::new();
        store.lock().data.insert(key.to_owned(), raw.to_vec());
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every subsequent `load_raw` fail (or stop failing).
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Make every subsequent `save_raw` fail (or stop failing).
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Number of `load_raw` attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` attempts, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Raw bytes stored under `key`, bypassing the call counters.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;
        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }
        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;
        if inner.fail_on_save {
            return Err(ConfigError::Other("simulated save failure".into()));
        }
        inner.data.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rule_table_is_valid_json() {
        let store = InMemoryConfigStore::with_rule_table(5);
        let raw = store.raw(RULE_TABLE_CONFIG_KEY).unwrap();
        let cfg: RuleTableConfig = serde_json::from_slice(&raw).unwrap();
        assert_eq!(cfg.universe_size, 5);
        assert_eq!(store.load_count(), 0);
    }

    #[test]
    fn failures_are_counted_and_store_nothing() {
        let store = InMemoryConfigStore::new();
        store.set_fail_on_save(true);
        assert!(matches!(
            store.save_raw("k", b"v"),
            Err(ConfigError::Other(_))
        ));
        assert_eq!(store.save_count(), 1);
        assert!(store.raw("k").is_none());

        store.set_fail_on_save(false);
        store.set_fail_on_load(true);
        store.save_raw("k", b"v").unwrap();
        assert!(matches!(store.load_raw("k"), Err(ConfigError::Other(_))));
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn clones_share_state() {
        let a = InMemoryConfigStore::new();
        let b = a.clone();
        a.save_raw("shared", b"1").unwrap();
        assert_eq!(b.load_raw("shared").unwrap(), b"1");
        assert_eq!(b.save_count(), 1);
        assert_eq!(a.load_count(), 1);
    }
}
