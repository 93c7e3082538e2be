// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::model::OrderDetails;
use crate::render;
use crate::repository::Repository;

const FORMAT: &str = "{orderStartDate, estimatedArrivalDate, actualArrivalDate, dueDate, actualReturnDate, custUserId}";

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn read_order_details(&mut self) -> anyhow::Result<Option<OrderDetails>> {
        let Some(p) = self.read_attributes(FORMAT, 6).await? else {
            return Ok(None);
        };
        Ok(Some(OrderDetails {
            order_start_date: p[0].clone(),
            estimated_arrival_date: p[1].clone(),
            actual_arrival_date: p[2].clone(),
            due_date: p[3].clone(),
            actual_return_date: p[4].clone(),
            cust_user_id: p[5].clone(),
        }))
    }

    pub(super) async fn create_order(&mut self) -> anyhow::Result<()> {
        if let Some(details) = self.read_order_details().await? {
            let result = self.repos.orders.create(details).await;
            self.print_created(result).await?;
        }
        Ok(())
    }

    pub(super) async fn update_order(&mut self) -> anyhow::Result<()> {
        let order_id = self.read_line("Enter orderId: ").await?;
        if let Some(details) = self.read_order_details().await? {
            let result = self.repos.orders.update(&order_id, details).await;
            self.print_outcome("Updated (or error):", result).await?;
        }
        Ok(())
    }

    pub(super) async fn delete_order(&mut self) -> anyhow::Result<()> {
        let order_id = self.read_line("Enter orderId: ").await?;
        let result = self.repos.orders.delete(&order_id).await;
        self.print_outcome("Deleted (or error):", result).await
    }

    pub(super) async fn query_orders(&mut self, field: &str) -> anyhow::Result<Option<String>> {
        if !matches!(
            field,
            "custUserId"
                | "orderStartDate"
                | "estimatedArrivalDate"
                | "actualArrivalDate"
                | "dueDate"
                | "actualReturnDate"
        ) {
            return self.unknown_field(field).await;
        }

        let value = self.read_line(&format!("Enter {}: ", field)).await?;
        let repos = Arc::clone(&self.repos);
        let repo = &repos.orders;
        let found = match field {
            "custUserId" => repo.query_by_cust_user_id(&value).await,
            "orderStartDate" => repo.query_by_order_start_date(&value).await,
            "estimatedArrivalDate" => repo.query_by_estimated_arrival_date(&value).await,
            "actualArrivalDate" => repo.query_by_actual_arrival_date(&value).await,
            "dueDate" => repo.query_by_due_date(&value).await,
            _ => repo.query_by_actual_return_date(&value).await,
        };
        Ok(Some(render::records(&found)?))
    }
}
