// SPDX-License-Identifier: GPL-3.0-only
use crate::model::Warehouse;
use crate::repository::memory::MemoryRepository;
use crate::repository::traits::Repository;

pub type WarehouseRepository = MemoryRepository<Warehouse>;

impl MemoryRepository<Warehouse> {
    pub async fn query_by_city(&self, city: &str) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| w.details.city == city).await
    }

    pub async fn query_by_zip_code(&self, zip_code: &str) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| w.details.zip_code == zip_code).await
    }

    pub async fn query_by_manager_ssn(&self, manager_ssn: &str) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| w.details.manager_ssn == manager_ssn).await
    }

    pub async fn query_by_phone_number(&self, phone_number: &str) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| w.details.phone_number == phone_number).await
    }

    pub async fn query_by_street(&self, street: &str) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| w.details.street == street).await
    }

    pub async fn query_by_equipment_capacity(&self, capacity: i32) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| w.details.equipment_capacity == capacity).await
    }

    /// Inclusive on both ends
    pub async fn query_by_equipment_capacity_range(&self, min: i32, max: i32) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| (min..=max).contains(&w.details.equipment_capacity))
            .await
    }

    pub async fn query_by_drone_capacity(&self, capacity: i32) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| w.details.drone_capacity == capacity).await
    }

    /// Inclusive on both ends
    pub async fn query_by_drone_capacity_range(&self, min: i32, max: i32) -> Vec<Warehouse> {
        self.find(&|w: &Warehouse| (min..=max).contains(&w.details.drone_capacity))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WarehouseDetails;
    use crate::test_helpers::sample_warehouse;

    fn with_capacities(city: &str, equipment: i32, drones: i32) -> WarehouseDetails {
        WarehouseDetails {
            city: city.to_string(),
            equipment_capacity: equipment,
            drone_capacity: drones,
            ..sample_warehouse()
        }
    }

    async fn seeded() -> WarehouseRepository {
        let repo = WarehouseRepository::new();
        repo.create(with_capacities("Reno", 10, 2)).await.unwrap();
        repo.create(with_capacities("reno", 20, 4)).await.unwrap();
        repo.create(with_capacities("Reno", 30, 6)).await.unwrap();
        repo
    }

    fn ids(records: &[Warehouse]) -> Vec<&str> {
        records.iter().map(|w| w.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_two_creates_and_city_query() {
        let repo = WarehouseRepository::new();
        let first = repo.create(sample_warehouse()).await.unwrap();
        let second = repo.create(sample_warehouse()).await.unwrap();
        assert_eq!(first.id, "0");
        assert_eq!(second.id, "1");

        let found = repo.query_by_city("Reno").await;
        assert_eq!(ids(&found), vec!["0", "1"]);

        let removed = repo.delete(&"0".to_string()).await.unwrap();
        assert_eq!(removed, first);
        assert!(repo.get_by_id(&"0".to_string()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_query_by_city_is_case_sensitive() {
        let repo = seeded().await;
        assert_eq!(ids(&repo.query_by_city("Reno").await), vec!["0", "2"]);
        assert_eq!(ids(&repo.query_by_city("reno").await), vec!["1"]);
        assert!(repo.query_by_city("RENO").await.is_empty());
        assert!(repo.query_by_city("Ren").await.is_empty());
    }

    #[tokio::test]
    async fn test_string_field_queries() {
        let repo = seeded().await;
        assert_eq!(repo.query_by_zip_code("89501").await.len(), 3);
        assert_eq!(repo.query_by_manager_ssn("123-45-6789").await.len(), 3);
        assert_eq!(repo.query_by_phone_number("555-1000").await.len(), 3);
        assert_eq!(repo.query_by_street("Main St").await.len(), 3);
        assert!(repo.query_by_street("Main").await.is_empty());
    }

    #[tokio::test]
    async fn test_capacity_exact_queries() {
        let repo = seeded().await;
        assert_eq!(ids(&repo.query_by_equipment_capacity(20).await), vec!["1"]);
        assert_eq!(ids(&repo.query_by_drone_capacity(6).await), vec!["2"]);
        assert!(repo.query_by_drone_capacity(5).await.is_empty());
    }

    #[tokio::test]
    async fn test_capacity_ranges_are_inclusive() {
        let repo = seeded().await;
        assert_eq!(
            ids(&repo.query_by_equipment_capacity_range(10, 20).await),
            vec!["0", "1"]
        );
        assert_eq!(ids(&repo.query_by_drone_capacity_range(4, 6).await), vec!["1", "2"]);
        assert_eq!(ids(&repo.query_by_drone_capacity_range(2, 2).await), vec!["0"]);
        assert!(repo.query_by_equipment_capacity_range(21, 29).await.is_empty());
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty() {
        let repo = seeded().await;
        assert!(repo.query_by_equipment_capacity_range(30, 10).await.is_empty());
    }
}
