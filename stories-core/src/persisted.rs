use tracing::{debug, warn};

use crate::effect::Effect;
use crate::storage::LocalStore;

/// A text value that starts from what the store holds under `key` and is
/// written back to the store whenever it is settled after a change.
#[derive(Debug)]
pub struct PersistedValue {
    store: LocalStore,
    key: String,
    value: String,
    write_back: Effect<(String, String)>,
}

impl PersistedValue {
    /// Reads `key` from `store`, falling back to `initial_value` when the key
    /// is absent or the store could not be read.
    pub async fn create(
        store: LocalStore,
        key: impl Into<String>,
        initial_value: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let value = match store.get(&key).await {
            Some(stored) => stored,
            None => initial_value.into(),
        };
        debug!(key = %key, value = %value, available = store.is_available(), "persisted value created");

        Self {
            store,
            key,
            value,
            write_back: Effect::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Takes effect immediately for `value()`; the store only sees it on the
    /// next `settle`.
    pub fn set_value(&mut self, new_value: impl Into<String>) {
        self.value = new_value.into();
    }

    /// Runs the write-back if `(key, value)` changed since the last run.
    /// Returns whether a write was attempted. Store failures are logged and
    /// otherwise ignored.
    pub async fn settle(&mut self) -> bool {
        let deps = (self.key.clone(), self.value.clone());
        if !self.write_back.should_run(&deps) {
            return false;
        }

        debug!(key = %deps.0, value = %deps.1, "write-back effect fired");
        if let Err(err) = self.store.set(&deps.0, &deps.1).await {
            warn!(key = %deps.0, error = %err, "failed to persist value, keeping it in memory only");
        }
        true
    }
}
