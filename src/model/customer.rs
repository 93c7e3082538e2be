// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;

use crate::model::traits::{AutoKey, Entity};
use crate::model::validation::{require_non_blank, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub user_id: String,

    #[serde(flatten)]
    pub details: CustomerDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    /// Kept as entered, no date parsing
    pub cust_start_date: String,
    pub city: String,
    pub zip_code: String,
    pub street: String,
    pub email: String,
    pub phone_number: String,
    pub cust_name: String,

    #[serde(rename = "type")]
    pub kind: String,
}

impl Entity for Customer {
    type Key = String;
    type Details = CustomerDetails;

    const NAME: &'static str = "customer";
    const KEY_FIELD: &'static str = "userId";

    fn key(&self) -> &String {
        &self.user_id
    }

    fn from_parts(user_id: String, details: CustomerDetails) -> ValidationResult<Self> {
        require_non_blank("userId", &user_id)?;
        Ok(Self { user_id, details })
    }
}

impl AutoKey for Customer {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_customer;

    #[test]
    fn test_customer_rejects_blank_user_id() {
        let err = Customer::from_parts(String::new(), sample_customer("Ada")).unwrap_err();
        assert_eq!(err.field(), "userId");
    }

    #[test]
    fn test_customer_type_field_name() {
        let customer = Customer::from_parts("0".to_string(), sample_customer("Ada")).unwrap();
        let json = serde_json::to_string(&customer).unwrap();
        assert!(json.starts_with(r#"{"userId":"0","custStartDate":"#));
        assert!(json.ends_with(r#""custName":"Ada","type":"business"}"#));
    }
}
