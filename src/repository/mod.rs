// SPDX-License-Identifier: GPL-3.0-only
pub mod customer;
pub mod employee;
pub mod equipment;
pub mod error;
pub mod memory;
pub mod order;
pub mod review;
pub mod traits;
pub mod warehouse;

pub use customer::CustomerRepository;
pub use employee::EmployeeRepository;
pub use equipment::{EquipmentManagement, Notice};
pub use error::{RepositoryError, RepositoryResult};
pub use order::OrderRepository;
pub use review::ReviewRepository;
pub use traits::Repository;
pub use warehouse::WarehouseRepository;

/// Every table the console works with, each behind its own lock
#[derive(Default)]
pub struct Repositories {
    pub warehouses: WarehouseRepository,
    pub equipment: EquipmentManagement,
    pub customers: CustomerRepository,
    pub employees: EmployeeRepository,
    pub orders: OrderRepository,
    pub reviews: ReviewRepository,
}

impl Repositories {
    pub fn new() -> Self {
        Self::default()
    }
}
