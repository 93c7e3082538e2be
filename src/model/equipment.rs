// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;

use crate::model::traits::Entity;
use crate::model::validation::ValidationResult;

/// Rentable equipment item, keyed by a caller-chosen number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
}

impl Entity for Equipment {
    type Key = i32;
    type Details = String;

    const NAME: &'static str = "equipment";
    const KEY_FIELD: &'static str = "id";

    fn key(&self) -> &i32 {
        &self.id
    }

    fn from_parts(id: i32, name: String) -> ValidationResult<Self> {
        Ok(Self { id, name })
    }
}
