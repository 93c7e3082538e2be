// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::model::{AutoKey, Entity};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::traits::Repository;

/// In-memory table for one entity type
///
/// The lock belongs to this instance only. Every writer holds it for the
/// whole operation, so identity assignment never races with another create.
pub struct MemoryRepository<E: Entity> {
    store: RwLock<IndexMap<E::Key, E>>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(IndexMap::new()),
        }
    }

    /// Store a record under a caller-supplied identity
    ///
    /// An existing record with the same identity is overwritten in place.
    pub async fn insert(&self, key: E::Key, details: E::Details) -> RepositoryResult<E> {
        let record = E::from_parts(key, details)?;
        let mut store = self.store.write().await;
        let replaced = store.insert(record.key().clone(), record.clone()).is_some();
        info!(table = E::NAME, key = %record.key(), replaced, "Stored record");
        Ok(record)
    }
}

impl<E: AutoKey> MemoryRepository<E> {
    /// Store a record under the next free numeric identity
    pub async fn create(&self, details: E::Details) -> RepositoryResult<E> {
        let mut store = self.store.write().await;
        let id = next_id(store.keys());
        let record = E::from_parts(id, details)?;
        store.insert(record.key().clone(), record.clone());
        info!(table = E::NAME, key = %record.key(), "Created record");
        Ok(record)
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// One past the largest numeric key, or "0" when none parse
fn next_id<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    keys.filter_map(|k| k.parse::<u64>().ok())
        .max()
        .map_or(0, |max| max + 1)
        .to_string()
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn get_by_id(&self, key: &E::Key) -> RepositoryResult<E> {
        let store = self.store.read().await;
        match store.get(key) {
            Some(record) => Ok(record.clone()),
            None => {
                debug!(table = E::NAME, key = %key, "Record not found");
                Err(RepositoryError::not_found(E::KEY_FIELD, key))
            }
        }
    }

    async fn get_all(&self) -> Vec<E> {
        self.store.read().await.values().cloned().collect()
    }

    async fn update(&self, key: &E::Key, details: E::Details) -> RepositoryResult<E> {
        let mut store = self.store.write().await;
        let Some(slot) = store.get_mut(key) else {
            warn!(table = E::NAME, key = %key, "Update of missing record");
            return Err(RepositoryError::not_found(E::KEY_FIELD, key));
        };

        let record = E::from_parts(key.clone(), details)?;
        *slot = record.clone();
        info!(table = E::NAME, key = %key, "Updated record");
        Ok(record)
    }

    async fn delete(&self, key: &E::Key) -> RepositoryResult<E> {
        let mut store = self.store.write().await;
        match store.shift_remove(key) {
            Some(record) => {
                info!(table = E::NAME, key = %key, "Deleted record");
                Ok(record)
            }
            None => {
                warn!(table = E::NAME, key = %key, "Delete of missing record");
                Err(RepositoryError::not_found(E::KEY_FIELD, key))
            }
        }
    }

    async fn find(&self, predicate: &(dyn for<'a> Fn(&'a E) -> bool + Send + Sync)) -> Vec<E> {
        let store = self.store.read().await;
        let matches: Vec<E> = store.values().filter(|r| predicate(r)).cloned().collect();
        debug!(table = E::NAME, scanned = store.len(), matched = matches.len(), "Scanned table");
        matches
    }

    async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}
