// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::model::CustomerDetails;
use crate::render;
use crate::repository::Repository;

const FORMAT: &str = "{custStartDate, city, zipCode, street, email, phoneNumber, custName, type}";

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn read_customer_details(&mut self) -> anyhow::Result<Option<CustomerDetails>> {
        let Some(p) = self.read_attributes(FORMAT, 8).await? else {
            return Ok(None);
        };
        Ok(Some(CustomerDetails {
            cust_start_date: p[0].clone(),
            city: p[1].clone(),
            zip_code: p[2].clone(),
            street: p[3].clone(),
            email: p[4].clone(),
            phone_number: p[5].clone(),
            cust_name: p[6].clone(),
            kind: p[7].clone(),
        }))
    }

    pub(super) async fn create_customer(&mut self) -> anyhow::Result<()> {
        if let Some(details) = self.read_customer_details().await? {
            let result = self.repos.customers.create(details).await;
            self.print_created(result).await?;
        }
        Ok(())
    }

    pub(super) async fn update_customer(&mut self) -> anyhow::Result<()> {
        let user_id = self.read_line("Enter userId: ").await?;
        if let Some(details) = self.read_customer_details().await? {
            let result = self.repos.customers.update(&user_id, details).await;
            self.print_outcome("Updated (or error):", result).await?;
        }
        Ok(())
    }

    pub(super) async fn delete_customer(&mut self) -> anyhow::Result<()> {
        let user_id = self.read_line("Enter userId: ").await?;
        let result = self.repos.customers.delete(&user_id).await;
        self.print_outcome("Deleted (or error):", result).await
    }

    pub(super) async fn query_customers(&mut self, field: &str) -> anyhow::Result<Option<String>> {
        if !matches!(
            field,
            "city" | "zipCode" | "email" | "phoneNumber" | "custName" | "type" | "custStartDate"
        ) {
            return self.unknown_field(field).await;
        }

        let value = self.read_line(&format!("Enter {}: ", field)).await?;
        let repos = Arc::clone(&self.repos);
        let repo = &repos.customers;
        let found = match field {
            "city" => repo.query_by_city(&value).await,
            "zipCode" => repo.query_by_zip_code(&value).await,
            "email" => repo.query_by_email(&value).await,
            "phoneNumber" => repo.query_by_phone_number(&value).await,
            "custName" => repo.query_by_cust_name(&value).await,
            "type" => repo.query_by_type(&value).await,
            _ => repo.query_by_cust_start_date(&value).await,
        };
        Ok(Some(render::records(&found)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::console::tests::run_script;
    use crate::repository::{Repositories, Repository};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_customer_create_update_and_query() {
        let repos = Arc::new(Repositories::new());
        let script = concat!(
            "3\n",
            "1\n{2024-01-15, Reno, 89501, Main St, ada@example.com, 555-3000, Ada, business}\n",
            "2\n0\n{2024-01-15, Reno, 89501, Main St, ada@example.com, 555-3000, Ada L, personal}\n",
            "3\ntype\npersonal\n5\n",
            "5\n0\n",
        );
        let out = run_script(Arc::clone(&repos), script).await;

        assert!(out.contains("Created:\n{\"userId\":\"0\",\"custStartDate\":\"2024-01-15\""));
        assert!(out.contains("Updated (or error):\n{\"userId\":\"0\""));
        assert!(out.contains("Query result:\n[{\"userId\":\"0\""));
        assert!(out.contains("\"custName\":\"Ada L\",\"type\":\"personal\"}]"));

        let customer = repos.customers.get_by_id(&"0".to_string()).await.unwrap();
        assert_eq!(customer.details.kind, "personal");
    }

    #[tokio::test]
    async fn test_customer_delete_missing() {
        let repos = Arc::new(Repositories::new());
        let out = run_script(repos, "3\n4\n12\n5\n0\n").await;
        assert!(out.contains(
            "Deleted (or error):\n{\"error\":\"not_found\",\"field\":\"userId\",\"value\":\"12\"}"
        ));
    }
}
