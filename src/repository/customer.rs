// SPDX-License-Identifier: GPL-3.0-only
use crate::model::Customer;
use crate::repository::memory::MemoryRepository;
use crate::repository::traits::Repository;

pub type CustomerRepository = MemoryRepository<Customer>;

impl MemoryRepository<Customer> {
    pub async fn query_by_city(&self, city: &str) -> Vec<Customer> {
        self.find(&|c: &Customer| c.details.city == city).await
    }

    pub async fn query_by_zip_code(&self, zip_code: &str) -> Vec<Customer> {
        self.find(&|c: &Customer| c.details.zip_code == zip_code).await
    }

    pub async fn query_by_email(&self, email: &str) -> Vec<Customer> {
        self.find(&|c: &Customer| c.details.email == email).await
    }

    pub async fn query_by_phone_number(&self, phone_number: &str) -> Vec<Customer> {
        self.find(&|c: &Customer| c.details.phone_number == phone_number).await
    }

    pub async fn query_by_cust_name(&self, cust_name: &str) -> Vec<Customer> {
        self.find(&|c: &Customer| c.details.cust_name == cust_name).await
    }

    pub async fn query_by_type(&self, kind: &str) -> Vec<Customer> {
        self.find(&|c: &Customer| c.details.kind == kind).await
    }

    pub async fn query_by_cust_start_date(&self, cust_start_date: &str) -> Vec<Customer> {
        self.find(&|c: &Customer| c.details.cust_start_date == cust_start_date).await
    }
}
