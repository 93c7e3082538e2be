// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::console::input::parse_int;
use crate::model::WarehouseDetails;
use crate::render;
use crate::repository::Repository;

const FORMAT: &str =
    "{phoneNumber, city, zipCode, street, equipmentCapacity, droneCapacity, managerSSN}";

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn read_warehouse_details(&mut self) -> anyhow::Result<Option<WarehouseDetails>> {
        let Some(p) = self.read_attributes(FORMAT, 7).await? else {
            return Ok(None);
        };
        let (Some(equipment_capacity), Some(drone_capacity)) = (parse_int(&p[4]), parse_int(&p[5]))
        else {
            self.input_error("equipmentCapacity / droneCapacity must be integers.").await?;
            return Ok(None);
        };

        Ok(Some(WarehouseDetails {
            phone_number: p[0].clone(),
            city: p[1].clone(),
            zip_code: p[2].clone(),
            street: p[3].clone(),
            equipment_capacity,
            drone_capacity,
            manager_ssn: p[6].clone(),
        }))
    }

    pub(super) async fn create_warehouse(&mut self) -> anyhow::Result<()> {
        if let Some(details) = self.read_warehouse_details().await? {
            let result = self.repos.warehouses.create(details).await;
            self.print_created(result).await?;
        }
        Ok(())
    }

    pub(super) async fn update_warehouse(&mut self) -> anyhow::Result<()> {
        let id = self.read_line("Enter id: ").await?;
        if let Some(details) = self.read_warehouse_details().await? {
            let result = self.repos.warehouses.update(&id, details).await;
            self.print_outcome("Updated (or error):", result).await?;
        }
        Ok(())
    }

    pub(super) async fn delete_warehouse(&mut self) -> anyhow::Result<()> {
        let id = self.read_line("Enter id: ").await?;
        let result = self.repos.warehouses.delete(&id).await;
        self.print_outcome("Deleted (or error):", result).await
    }

    pub(super) async fn query_warehouses(&mut self, field: &str) -> anyhow::Result<Option<String>> {
        let repos = Arc::clone(&self.repos);
        let repo = &repos.warehouses;
        let found = match field {
            "city" | "zipCode" | "managerSSN" | "phoneNumber" | "street" => {
                let value = self.read_line(&format!("Enter {}: ", field)).await?;
                match field {
                    "city" => repo.query_by_city(&value).await,
                    "zipCode" => repo.query_by_zip_code(&value).await,
                    "managerSSN" => repo.query_by_manager_ssn(&value).await,
                    "phoneNumber" => repo.query_by_phone_number(&value).await,
                    _ => repo.query_by_street(&value).await,
                }
            }
            "equipmentCapacity" => {
                let Some(n) = self.read_int("Enter equipmentCapacity (int): ", field).await? else {
                    return Ok(None);
                };
                repo.query_by_equipment_capacity(n).await
            }
            "droneCapacity" => {
                let Some(n) = self.read_int("Enter droneCapacity (int): ", field).await? else {
                    return Ok(None);
                };
                repo.query_by_drone_capacity(n).await
            }
            "equipmentCapacityRange" => {
                let Some((min, max)) = self.read_range("equipmentCapacity").await? else {
                    return Ok(None);
                };
                repo.query_by_equipment_capacity_range(min, max).await
            }
            "droneCapacityRange" => {
                let Some((min, max)) = self.read_range("droneCapacity").await? else {
                    return Ok(None);
                };
                repo.query_by_drone_capacity_range(min, max).await
            }
            _ => return self.unknown_field(field).await,
        };
        Ok(Some(render::records(&found)?))
    }
}
