// SPDX-License-Identifier: GPL-3.0-only
use std::fmt;
use tracing::info;

use crate::model::Equipment;
use crate::repository::error::RepositoryResult;
use crate::repository::memory::MemoryRepository;
use crate::repository::traits::Repository;

/// Confirmation for a drone hand-off or a return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Returned { id: i32 },
    Delivered { id: i32, drone_id: i32, date: String },
    PickupScheduled { id: i32, drone_id: i32, date: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Returned { .. } => write!(f, "Equipment returned."),
            Notice::Delivered { drone_id, date, .. } => {
                write!(f, "Equipment delivered by drone {} on {}", drone_id, date)
            }
            Notice::PickupScheduled { drone_id, date, .. } => write!(
                f,
                "Equipment scheduled to be picked up by drone {} on {}",
                drone_id, date
            ),
        }
    }
}

/// Rental desk over the equipment table
///
/// Only `add` changes the table. Rent, return, delivery and pickup check
/// that the item exists and report what happened.
pub struct EquipmentManagement {
    items: MemoryRepository<Equipment>,
}

impl EquipmentManagement {
    pub fn new() -> Self {
        Self {
            items: MemoryRepository::new(),
        }
    }

    /// Register an item, replacing any item with the same id
    pub async fn add(&self, id: i32, name: impl Into<String>) -> RepositoryResult<Equipment> {
        self.items.insert(id, name.into()).await
    }

    /// Name of the item to hand out
    pub async fn rent(&self, id: i32) -> RepositoryResult<String> {
        let item = self.items.get_by_id(&id).await?;
        info!(equipment_id = id, name = %item.name, "Equipment rented");
        Ok(item.name)
    }

    pub async fn return_equipment(&self, id: i32) -> RepositoryResult<Notice> {
        self.items.get_by_id(&id).await?;
        Ok(Notice::Returned { id })
    }

    pub async fn deliver(&self, id: i32, drone_id: i32, date: &str) -> RepositoryResult<Notice> {
        self.items.get_by_id(&id).await?;
        info!(equipment_id = id, drone_id, date, "Equipment delivery recorded");
        Ok(Notice::Delivered {
            id,
            drone_id,
            date: date.to_string(),
        })
    }

    pub async fn pickup(&self, id: i32, drone_id: i32, date: &str) -> RepositoryResult<Notice> {
        self.items.get_by_id(&id).await?;
        info!(equipment_id = id, drone_id, date, "Equipment pickup scheduled");
        Ok(Notice::PickupScheduled {
            id,
            drone_id,
            date: date.to_string(),
        })
    }

    /// Every registered item in the order it was first added
    pub async fn list(&self) -> Vec<Equipment> {
        self.items.get_all().await
    }
}

impl Default for EquipmentManagement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;

    #[tokio::test]
    async fn test_add_and_rent() {
        let desk = EquipmentManagement::new();
        desk.add(5, "Forklift").await.unwrap();
        assert_eq!(desk.rent(5).await.unwrap(), "Forklift");
    }

    #[tokio::test]
    async fn test_rent_unknown_id_is_not_found() {
        let desk = EquipmentManagement::new();
        let err = desk.rent(5).await.unwrap_err();
        assert_eq!(err, RepositoryError::not_found("id", 5));
    }

    #[tokio::test]
    async fn test_add_overwrites_name() {
        let desk = EquipmentManagement::new();
        desk.add(1, "Pallet jack").await.unwrap();
        desk.add(2, "Ladder").await.unwrap();
        desk.add(1, "Hand truck").await.unwrap();

        let items = desk.list().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Equipment { id: 1, name: "Hand truck".to_string() });
        assert_eq!(items[1].id, 2);
    }

    #[tokio::test]
    async fn test_deliver_and_pickup_messages() {
        let desk = EquipmentManagement::new();
        desk.add(3, "Crate").await.unwrap();

        let delivered = desk.deliver(3, 12, "05/01/2024").await.unwrap();
        assert_eq!(delivered.to_string(), "Equipment delivered by drone 12 on 05/01/2024");

        let pickup = desk.pickup(3, 14, "05/09/2024").await.unwrap();
        assert_eq!(
            pickup.to_string(),
            "Equipment scheduled to be picked up by drone 14 on 05/09/2024"
        );

        let returned = desk.return_equipment(3).await.unwrap();
        assert_eq!(returned, Notice::Returned { id: 3 });
        assert_eq!(returned.to_string(), "Equipment returned.");
    }

    #[tokio::test]
    async fn test_checks_do_not_mutate() {
        let desk = EquipmentManagement::new();
        desk.add(3, "Crate").await.unwrap();
        desk.rent(3).await.unwrap();
        desk.return_equipment(3).await.unwrap();
        assert!(desk.deliver(4, 1, "today").await.unwrap_err().is_not_found());
        assert!(desk.pickup(4, 1, "today").await.unwrap_err().is_not_found());
        assert_eq!(desk.list().await.len(), 1);
    }
}
