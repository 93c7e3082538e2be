// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

use crate::model::validation::ValidationResult;

/// A record type that can live in a repository table
///
/// A record is split into its identity and its details. The details carry
/// every non-key attribute, so replacing them is a full update.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;
    type Details: Send + 'static;

    /// Table name used in logs
    const NAME: &'static str;

    /// Identity field name reported by not-found errors
    const KEY_FIELD: &'static str;

    fn key(&self) -> &Self::Key;

    /// Build a record, checking every attribute constraint
    fn from_parts(key: Self::Key, details: Self::Details) -> ValidationResult<Self>;
}

/// Records whose identity the store assigns on create
pub trait AutoKey: Entity<Key = String> {}
