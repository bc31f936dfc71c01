use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocalData {
    // key -> stored text
    pub entries: HashMap<String, String>,
}

/// Text key-value store persisted as a single JSON file. Clones share state.
#[derive(Debug, Clone)]
pub struct LocalStore {
    inner: Arc<RwLock<LocalData>>,
    path: Option<PathBuf>,
    available: Arc<AtomicBool>,
    // set when the file exists but could not be read; never written over
    read_only: bool,
}

impl LocalStore {
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(LocalData::default())),
            path: None,
            available: Arc::new(AtomicBool::new(true)),
            read_only: false,
        }
    }

    /// Opens the store at `path`. Never fails: a missing file starts empty, a
    /// corrupted one falls back to the `.json.tmp` sibling, and an unreadable
    /// one leaves the store empty and marked unavailable for its lifetime.
    pub async fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let (data, available) = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<LocalData>(&bytes) {
                Ok(data) => (data, true),
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "failed to parse store, trying tmp fallback");
                    let tmp = path.with_extension("json.tmp");
                    let data = match tokio::fs::read(&tmp).await {
                        Ok(tmp_bytes) => serde_json::from_slice(&tmp_bytes).unwrap_or_default(),
                        Err(_) => LocalData::default(),
                    };
                    (data, true)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (LocalData::default(), true),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "store unavailable, values will not persist");
                (LocalData::default(), false)
            }
        };

        Self {
            inner: Arc::new(RwLock::new(data)),
            path: Some(path),
            available: Arc::new(AtomicBool::new(available)),
            read_only: !available,
        }
    }

    /// False when the file could not be read at load, or after a failed
    /// persist until a later one succeeds.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.read().await.entries.get(key).cloned()
    }

    /// Stores `value` under `key` and persists the whole map. The in-memory
    /// entry is updated even when persisting fails. A store that could not
    /// be read at load keeps values in memory only and leaves the file alone.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.entries.insert(key.to_owned(), value.to_owned());
        drop(inner);

        if self.read_only {
            debug!(key, "store unavailable; skipping persist");
            return Ok(());
        }

        match self.persist().await {
            Ok(()) => {
                self.available.store(true, Ordering::Relaxed);
                Ok(())
            }
            Err(err) => {
                self.available.store(false, Ordering::Relaxed);
                Err(err)
            }
        }
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            debug!("store is in-memory only; skipping persist");
            return Ok(());
        };

        let bytes = {
            let inner = self.inner.read().await;
            serde_json::to_vec_pretty(&*inner)?
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        // Ecriture atomique
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}
