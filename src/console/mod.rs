// SPDX-License-Identifier: GPL-3.0-only
mod customer;
mod employee;
mod equipment;
pub mod input;
mod order;
mod review;
mod warehouse;

use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::model::Entity;
use crate::repository::{Repositories, RepositoryResult};
use crate::render;
use input::{parse_brace_list, parse_int};

/// End of input reached while a prompt was waiting
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    Warehouse,
    Customer,
    Employee,
    Order,
    Review,
}

impl Table {
    fn title(self) -> &'static str {
        match self {
            Table::Warehouse => "Warehouse",
            Table::Customer => "Customer",
            Table::Employee => "Employee",
            Table::Order => "Order",
            Table::Review => "Review",
        }
    }

    /// Field names accepted by the query prompt
    fn query_fields(self) -> &'static [&'static str] {
        match self {
            Table::Warehouse => &[
                "city",
                "zipCode",
                "managerSSN",
                "phoneNumber",
                "street",
                "equipmentCapacity",
                "equipmentCapacityRange",
                "droneCapacity",
                "droneCapacityRange",
            ],
            Table::Customer => &[
                "city",
                "zipCode",
                "email",
                "phoneNumber",
                "custName",
                "type",
                "custStartDate",
            ],
            Table::Employee => &["name", "phoneNumber", "sex", "salary", "salaryRange"],
            Table::Order => &[
                "custUserId",
                "orderStartDate",
                "estimatedArrivalDate",
                "actualArrivalDate",
                "dueDate",
                "actualReturnDate",
            ],
            Table::Review => &["orderId", "userId", "ratings", "comments"],
        }
    }
}

/// Menu-driven text front-end over the repositories
pub struct Console<R, W> {
    repos: Arc<Repositories>,
    input: R,
    output: W,
    show_tables: bool,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(repos: Arc<Repositories>, input: R, output: W, show_tables: bool) -> Self {
        Self {
            repos,
            input,
            output,
            show_tables,
        }
    }

    /// Run the main menu until the user exits or input ends
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.main_menu().await {
            Err(e) if e.is::<InputClosed>() => {
                info!("Console input closed");
                self.println("").await?;
                self.println("Bye!").await
            }
            other => other,
        }
    }

    async fn main_menu(&mut self) -> anyhow::Result<()> {
        loop {
            self.println("").await?;
            self.println("Main menu:").await?;
            self.println("1. Warehouse").await?;
            self.println("2. Equipment Management").await?;
            self.println("3. Customer").await?;
            self.println("4. Employee").await?;
            self.println("5. Order").await?;
            self.println("6. Review").await?;
            self.println("0. Exit").await?;

            let choice = self.read_line("Please enter a number: ").await?;
            match choice.as_str() {
                "1" => self.table_menu(Table::Warehouse).await?,
                "2" => self.equipment_menu().await?,
                "3" => self.table_menu(Table::Customer).await?,
                "4" => self.table_menu(Table::Employee).await?,
                "5" => self.table_menu(Table::Order).await?,
                "6" => self.table_menu(Table::Review).await?,
                "0" => {
                    self.println("Bye!").await?;
                    return Ok(());
                }
                _ => self.input_error(&format!("Unknown choice: {}", choice)).await?,
            }
        }
    }

    async fn table_menu(&mut self, table: Table) -> anyhow::Result<()> {
        let rows = self.table_len(table).await;
        debug!(table = table.title(), rows, "Opened table menu");
        loop {
            self.println("").await?;
            self.println(&format!("=== {} Table ===", table.title())).await?;
            if self.show_tables {
                self.println("Current data:").await?;
                let data = self.table_json(table).await?;
                self.println(&data).await?;
            }

            self.println("").await?;
            self.println("Operations:").await?;
            self.println("1. Create").await?;
            self.println("2. Update").await?;
            self.println("3. Query").await?;
            self.println("4. Delete").await?;
            self.println("5. Return to Main menu").await?;

            let op = self.read_line("Enter 1/2/3/4/5: ").await?;
            match op.as_str() {
                "1" => self.create(table).await?,
                "2" => self.update(table).await?,
                "3" => self.query(table).await?,
                "4" => self.delete(table).await?,
                "5" => return Ok(()),
                _ => self.input_error(&format!("Unknown operation: {}", op)).await?,
            }
        }
    }

    async fn query(&mut self, table: Table) -> anyhow::Result<()> {
        loop {
            self.println("").await?;
            self.println("Query by which field?").await?;
            self.println(&format!("Options: {}", table.query_fields().join(" | "))).await?;
            self.println(&format!("Or enter 9 to return to {} menu.", table.title())).await?;

            let field = self.read_line("Field: ").await?;
            if field == "9" {
                return Ok(());
            }

            let result = match table {
                Table::Warehouse => self.query_warehouses(&field).await?,
                Table::Customer => self.query_customers(&field).await?,
                Table::Employee => self.query_employees(&field).await?,
                Table::Order => self.query_orders(&field).await?,
                Table::Review => self.query_reviews(&field).await?,
            };
            let Some(json) = result else {
                continue;
            };

            self.println("Query result:").await?;
            self.println(&json).await?;

            self.println("").await?;
            self.println("Next step:").await?;
            self.println(&format!(
                "1. Create   2. Update   3. Query   4. Delete   5. Back to {} menu",
                table.title()
            ))
            .await?;
            let next = self.read_line("Enter 1/2/3/4/5: ").await?;
            match next.as_str() {
                "1" => self.create(table).await?,
                "2" => self.update(table).await?,
                "3" => continue,
                "4" => self.delete(table).await?,
                "5" => return Ok(()),
                _ => self.input_error(&format!("Unknown choice: {}", next)).await?,
            }
        }
    }

    async fn table_json(&self, table: Table) -> anyhow::Result<String> {
        use crate::repository::Repository;

        let json = match table {
            Table::Warehouse => render::records(&self.repos.warehouses.get_all().await)?,
            Table::Customer => render::records(&self.repos.customers.get_all().await)?,
            Table::Employee => render::records(&self.repos.employees.get_all().await)?,
            Table::Order => render::records(&self.repos.orders.get_all().await)?,
            Table::Review => render::records(&self.repos.reviews.get_all().await)?,
        };
        Ok(json)
    }

    async fn table_len(&self, table: Table) -> usize {
        use crate::repository::Repository;

        match table {
            Table::Warehouse => self.repos.warehouses.len().await,
            Table::Customer => self.repos.customers.len().await,
            Table::Employee => self.repos.employees.len().await,
            Table::Order => self.repos.orders.len().await,
            Table::Review => self.repos.reviews.len().await,
        }
    }

    async fn create(&mut self, table: Table) -> anyhow::Result<()> {
        self.println("").await?;
        self.println(&format!("Create {}", table.title())).await?;
        match table {
            Table::Warehouse => self.create_warehouse().await,
            Table::Customer => self.create_customer().await,
            Table::Employee => self.create_employee().await,
            Table::Order => self.create_order().await,
            Table::Review => self.create_review().await,
        }
    }

    async fn update(&mut self, table: Table) -> anyhow::Result<()> {
        self.println("").await?;
        self.println(&format!("Update {}", table.title())).await?;
        match table {
            Table::Warehouse => self.update_warehouse().await,
            Table::Customer => self.update_customer().await,
            Table::Employee => self.update_employee().await,
            Table::Order => self.update_order().await,
            Table::Review => self.update_review().await,
        }
    }

    async fn delete(&mut self, table: Table) -> anyhow::Result<()> {
        self.println("").await?;
        self.println(&format!("Delete {}", table.title())).await?;
        match table {
            Table::Warehouse => self.delete_warehouse().await,
            Table::Customer => self.delete_customer().await,
            Table::Employee => self.delete_employee().await,
            Table::Order => self.delete_order().await,
            Table::Review => self.delete_review().await,
        }
    }

    // I/O helpers shared by the table handlers

    async fn println(&mut self, line: &str) -> anyhow::Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Prompt and read one trimmed line
    async fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    async fn input_error(&mut self, message: &str) -> anyhow::Result<()> {
        debug!(input = message, "Rejected console input");
        self.println(&format!("[Input Error] {}", message)).await
    }

    /// Read a `{...}` attribute list with exactly `arity` entries
    async fn read_attributes(
        &mut self,
        format: &str,
        arity: usize,
    ) -> anyhow::Result<Option<Vec<String>>> {
        self.println(&format!("Please input attributes in format {}", format)).await?;
        let line = self.read_line("> ").await?;
        match parse_brace_list(&line) {
            Some(parts) if parts.len() == arity => Ok(Some(parts)),
            _ => {
                self.input_error(&format!("Expect {} attributes inside braces.", arity))
                    .await?;
                Ok(None)
            }
        }
    }

    /// Parse an integer attribute, reporting `field` when it is not one
    async fn int_attribute(&mut self, value: &str, field: &str) -> anyhow::Result<Option<i32>> {
        match parse_int(value) {
            Some(n) => Ok(Some(n)),
            None => {
                self.input_error(&format!("{} must be an integer.", field)).await?;
                Ok(None)
            }
        }
    }

    async fn read_int(&mut self, prompt: &str, field: &str) -> anyhow::Result<Option<i32>> {
        let value = self.read_line(prompt).await?;
        self.int_attribute(&value, field).await
    }

    async fn read_range(&mut self, field: &str) -> anyhow::Result<Option<(i32, i32)>> {
        let min = self.read_line(&format!("Enter min {} (int): ", field)).await?;
        let max = self.read_line(&format!("Enter max {} (int): ", field)).await?;
        match (parse_int(&min), parse_int(&max)) {
            (Some(min), Some(max)) => Ok(Some((min, max))),
            _ => {
                self.input_error("min/max must be integers.").await?;
                Ok(None)
            }
        }
    }

    async fn unknown_field(&mut self, field: &str) -> anyhow::Result<Option<String>> {
        self.input_error(&format!("Unknown field: {}", field)).await?;
        Ok(None)
    }

    async fn print_outcome<E: Entity>(
        &mut self,
        label: &str,
        result: RepositoryResult<E>,
    ) -> anyhow::Result<()> {
        let json = render::outcome(&result)?;
        self.println(label).await?;
        self.println(&json).await
    }

    async fn print_created<E: Entity>(&mut self, result: RepositoryResult<E>) -> anyhow::Result<()> {
        let label = if result.is_ok() { "Created:" } else { "Create failed:" };
        self.print_outcome(label, result).await
    }
}
