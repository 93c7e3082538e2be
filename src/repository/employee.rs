// SPDX-License-Identifier: GPL-3.0-only
use crate::model::Employee;
use crate::repository::memory::MemoryRepository;
use crate::repository::traits::Repository;

pub type EmployeeRepository = MemoryRepository<Employee>;

impl MemoryRepository<Employee> {
    pub async fn query_by_name(&self, name: &str) -> Vec<Employee> {
        self.find(&|e: &Employee| e.details.name == name).await
    }

    pub async fn query_by_phone_number(&self, phone_number: &str) -> Vec<Employee> {
        self.find(&|e: &Employee| e.details.phone_number == phone_number).await
    }

    pub async fn query_by_sex(&self, sex: &str) -> Vec<Employee> {
        self.find(&|e: &Employee| e.details.sex == sex).await
    }

    pub async fn query_by_salary(&self, salary: i32) -> Vec<Employee> {
        self.find(&|e: &Employee| e.details.salary == salary).await
    }

    /// Inclusive on both ends
    pub async fn query_by_salary_range(&self, min: i32, max: i32) -> Vec<Employee> {
        self.find(&|e: &Employee| (min..=max).contains(&e.details.salary)).await
    }
}
