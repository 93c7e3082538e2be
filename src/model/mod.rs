// SPDX-License-Identifier: GPL-3.0-only
pub mod customer;
pub mod employee;
pub mod equipment;
pub mod order;
pub mod review;
pub mod traits;
pub mod validation;
pub mod warehouse;

pub use customer::{Customer, CustomerDetails};
pub use employee::{Employee, EmployeeDetails};
pub use equipment::Equipment;
pub use order::{Order, OrderDetails};
pub use review::{Review, ReviewDetails, ReviewKey};
pub use traits::{AutoKey, Entity};
pub use validation::ValidationError;
pub use warehouse::{Warehouse, WarehouseDetails};
