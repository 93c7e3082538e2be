// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;

use crate::model::Entity;
use crate::repository::error::RepositoryResult;

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Get a record by its identity
    async fn get_by_id(&self, key: &E::Key) -> RepositoryResult<E>;

    /// List every record in insertion order
    async fn get_all(&self) -> Vec<E>;

    /// Replace every non-key attribute of an existing record
    /// Misses are reported, never turned into an insert
    async fn update(&self, key: &E::Key, details: E::Details) -> RepositoryResult<E>;

    /// Remove a record and return what was stored
    async fn delete(&self, key: &E::Key) -> RepositoryResult<E>;

    /// Collect every record matching the predicate, in insertion order
    async fn find(&self, predicate: &(dyn for<'a> Fn(&'a E) -> bool + Send + Sync)) -> Vec<E>;

    /// Number of stored records
    async fn len(&self) -> usize;
}
