// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;

use crate::model::traits::{AutoKey, Entity};
use crate::model::validation::{require_non_blank, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,

    #[serde(flatten)]
    pub details: OrderDetails,
}

/// Dates are free text as typed at the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_start_date: String,
    pub estimated_arrival_date: String,
    pub actual_arrival_date: String,
    pub due_date: String,
    pub actual_return_date: String,
    pub cust_user_id: String,
}

impl Entity for Order {
    type Key = String;
    type Details = OrderDetails;

    const NAME: &'static str = "order";
    const KEY_FIELD: &'static str = "orderId";

    fn key(&self) -> &String {
        &self.order_id
    }

    fn from_parts(order_id: String, details: OrderDetails) -> ValidationResult<Self> {
        require_non_blank("orderId", &order_id)?;
        Ok(Self { order_id, details })
    }
}

impl AutoKey for Order {}
