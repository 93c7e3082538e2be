// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;

use crate::model::traits::{AutoKey, Entity};
use crate::model::validation::{require_non_blank, require_non_negative, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warehouse {
    /// Auto-assigned numeric id rendered as text
    pub id: String,

    #[serde(flatten)]
    pub details: WarehouseDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDetails {
    pub phone_number: String,
    pub city: String,
    pub zip_code: String,
    pub street: String,

    /// Number of equipment slots, never negative
    pub equipment_capacity: i32,

    /// Number of drone bays, never negative
    pub drone_capacity: i32,

    #[serde(rename = "managerSSN")]
    pub manager_ssn: String,
}

impl Entity for Warehouse {
    type Key = String;
    type Details = WarehouseDetails;

    const NAME: &'static str = "warehouse";
    const KEY_FIELD: &'static str = "id";

    fn key(&self) -> &String {
        &self.id
    }

    fn from_parts(id: String, details: WarehouseDetails) -> ValidationResult<Self> {
        require_non_blank("id", &id)?;
        require_non_negative("equipmentCapacity", details.equipment_capacity)?;
        require_non_negative("droneCapacity", details.drone_capacity)?;
        Ok(Self { id, details })
    }
}

impl AutoKey for Warehouse {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValidationError;
    use crate::test_helpers::sample_warehouse;

    #[test]
    fn test_warehouse_from_parts() {
        let warehouse = Warehouse::from_parts("3".to_string(), sample_warehouse()).unwrap();
        assert_eq!(warehouse.key(), "3");
        assert_eq!(warehouse.details.city, "Reno");
        assert_eq!(warehouse.details.equipment_capacity, 10);
    }

    #[test]
    fn test_warehouse_rejects_blank_id() {
        let err = Warehouse::from_parts("  ".to_string(), sample_warehouse()).unwrap_err();
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn test_warehouse_rejects_negative_capacities() {
        let mut details = sample_warehouse();
        details.equipment_capacity = -1;
        let err = Warehouse::from_parts("0".to_string(), details).unwrap_err();
        assert_eq!(err, ValidationError::Negative { field: "equipmentCapacity", value: -1 });

        let mut details = sample_warehouse();
        details.drone_capacity = -5;
        let err = Warehouse::from_parts("0".to_string(), details).unwrap_err();
        assert_eq!(err.field(), "droneCapacity");
    }

    #[test]
    fn test_warehouse_serializes_in_declared_order() {
        let warehouse = Warehouse::from_parts("0".to_string(), sample_warehouse()).unwrap();
        let json = serde_json::to_string(&warehouse).unwrap();
        assert_eq!(
            json,
            r#"{"id":"0","phoneNumber":"555-1000","city":"Reno","zipCode":"89501","street":"Main St","equipmentCapacity":10,"droneCapacity":2,"managerSSN":"123-45-6789"}"#
        );
    }
}
