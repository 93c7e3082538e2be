// SPDX-License-Identifier: GPL-3.0-only
pub mod formatter;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Serializer;

use crate::model::Entity;
use crate::repository::{RepositoryError, RepositoryResult};

pub use formatter::RecordFormatter;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    field: &'a str,
    value: String,
}

/// Serialize any value with the record escaping rules
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, RecordFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

pub fn record<E: Entity>(record: &E) -> serde_json::Result<String> {
    to_json(record)
}

/// JSON array in the given order, `[]` when empty
pub fn records<E: Entity>(records: &[E]) -> serde_json::Result<String> {
    to_json(records)
}

/// `{"error":..,"field":..,"value":..}`
pub fn error(err: &RepositoryError) -> serde_json::Result<String> {
    to_json(&ErrorBody {
        error: err.code(),
        field: err.field(),
        value: err.value(),
    })
}

/// Either the record or the error object
pub fn outcome<E: Entity>(result: &RepositoryResult<E>) -> serde_json::Result<String> {
    match result {
        Ok(r) => record(r),
        Err(e) => error(e),
    }
}
