// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;
use std::fmt;

use crate::model::traits::Entity;
use crate::model::validation::{require_non_blank, ValidationResult};

/// Composite identity of a review: one review per user per order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewKey {
    pub order_id: String,
    pub user_id: String,
}

impl ReviewKey {
    pub fn new(order_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            user_id: user_id.into(),
        }
    }
}

impl fmt::Display for ReviewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.order_id, self.user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    #[serde(flatten)]
    pub key: ReviewKey,

    #[serde(flatten)]
    pub details: ReviewDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDetails {
    pub comments: String,
    pub ratings: i32,
}

impl Entity for Review {
    type Key = ReviewKey;
    type Details = ReviewDetails;

    const NAME: &'static str = "review";
    const KEY_FIELD: &'static str = "compositeKey";

    fn key(&self) -> &ReviewKey {
        &self.key
    }

    fn from_parts(key: ReviewKey, details: ReviewDetails) -> ValidationResult<Self> {
        require_non_blank("orderId", &key.order_id)?;
        require_non_blank("userId", &key.user_id)?;
        Ok(Self { key, details })
    }
}
