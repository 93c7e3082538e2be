// SPDX-License-Identifier: GPL-3.0-only
use crate::model::Order;
use crate::repository::memory::MemoryRepository;
use crate::repository::traits::Repository;

pub type OrderRepository = MemoryRepository<Order>;

impl MemoryRepository<Order> {
    pub async fn query_by_cust_user_id(&self, cust_user_id: &str) -> Vec<Order> {
        self.find(&|o: &Order| o.details.cust_user_id == cust_user_id).await
    }

    pub async fn query_by_order_start_date(&self, date: &str) -> Vec<Order> {
        self.find(&|o: &Order| o.details.order_start_date == date).await
    }

    pub async fn query_by_estimated_arrival_date(&self, date: &str) -> Vec<Order> {
        self.find(&|o: &Order| o.details.estimated_arrival_date == date).await
    }

    pub async fn query_by_actual_arrival_date(&self, date: &str) -> Vec<Order> {
        self.find(&|o: &Order| o.details.actual_arrival_date == date).await
    }

    pub async fn query_by_due_date(&self, date: &str) -> Vec<Order> {
        self.find(&|o: &Order| o.details.due_date == date).await
    }

    pub async fn query_by_actual_return_date(&self, date: &str) -> Vec<Order> {
        self.find(&|o: &Order| o.details.actual_return_date == date).await
    }
}
