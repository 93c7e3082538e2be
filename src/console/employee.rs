// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::model::EmployeeDetails;
use crate::render;
use crate::repository::Repository;

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub(super) async fn create_employee(&mut self) -> anyhow::Result<()> {
        let Some(p) = self.read_attributes("{ssn, name, phoneNumber, sex, salary}", 5).await? else {
            return Ok(());
        };
        let Some(salary) = self.int_attribute(&p[4], "salary").await? else {
            return Ok(());
        };

        let details = EmployeeDetails {
            name: p[1].clone(),
            phone_number: p[2].clone(),
            sex: p[3].clone(),
            salary,
        };
        let result = self.repos.employees.insert(p[0].clone(), details).await;
        self.print_created(result).await
    }

    pub(super) async fn update_employee(&mut self) -> anyhow::Result<()> {
        let ssn = self.read_line("Enter ssn: ").await?;
        let Some(p) = self.read_attributes("{name, phoneNumber, sex, salary}", 4).await? else {
            return Ok(());
        };
        let Some(salary) = self.int_attribute(&p[3], "salary").await? else {
            return Ok(());
        };

        let details = EmployeeDetails {
            name: p[0].clone(),
            phone_number: p[1].clone(),
            sex: p[2].clone(),
            salary,
        };
        let result = self.repos.employees.update(&ssn, details).await;
        self.print_outcome("Updated (or error):", result).await
    }

    pub(super) async fn delete_employee(&mut self) -> anyhow::Result<()> {
        let ssn = self.read_line("Enter ssn: ").await?;
        let result = self.repos.employees.delete(&ssn).await;
        self.print_outcome("Deleted (or error):", result).await
    }

    pub(super) async fn query_employees(&mut self, field: &str) -> anyhow::Result<Option<String>> {
        let repos = Arc::clone(&self.repos);
        let repo = &repos.employees;
        let found = match field {
            "name" => repo.query_by_name(&self.read_line("Enter name: ").await?).await,
            "phoneNumber" => {
                repo.query_by_phone_number(&self.read_line("Enter phoneNumber: ").await?)
                    .await
            }
            "sex" => repo.query_by_sex(&self.read_line("Enter sex: ").await?).await,
            "salary" => {
                let Some(salary) = self.read_int("Enter salary (int): ", "salary").await? else {
                    return Ok(None);
                };
                repo.query_by_salary(salary).await
            }
            "salaryRange" => {
                let Some((min, max)) = self.read_range("salary").await? else {
                    return Ok(None);
                };
                repo.query_by_salary_range(min, max).await
            }
            _ => return self.unknown_field(field).await,
        };
        Ok(Some(render::records(&found)?))
    }
}
