// SPDX-License-Identifier: GPL-3.0-only
use crate::config::Config;
use crate::model::{CustomerDetails, EmployeeDetails, OrderDetails, ReviewDetails, WarehouseDetails};

/// The warehouse used throughout the examples: Reno, 10 equipment slots, 2 drone bays
pub fn sample_warehouse() -> WarehouseDetails {
    WarehouseDetails {
        phone_number: "555-1000".to_string(),
        city: "Reno".to_string(),
        zip_code: "89501".to_string(),
        street: "Main St".to_string(),
        equipment_capacity: 10,
        drone_capacity: 2,
        manager_ssn: "123-45-6789".to_string(),
    }
}

/// A business customer in Reno, email derived from the name
pub fn sample_customer(name: &str) -> CustomerDetails {
    CustomerDetails {
        cust_start_date: "2024-01-15".to_string(),
        city: "Reno".to_string(),
        zip_code: "89501".to_string(),
        street: "Main St".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone_number: "555-3000".to_string(),
        cust_name: name.to_string(),
        kind: "business".to_string(),
    }
}

pub fn sample_employee(name: &str, salary: i32) -> EmployeeDetails {
    EmployeeDetails {
        name: name.to_string(),
        phone_number: "555-2000".to_string(),
        sex: "F".to_string(),
        salary,
    }
}

/// An order that arrived a day late and has not been returned yet
pub fn sample_order(cust_user_id: &str, start_date: &str) -> OrderDetails {
    OrderDetails {
        order_start_date: start_date.to_string(),
        estimated_arrival_date: "2024-05-03".to_string(),
        actual_arrival_date: "2024-05-04".to_string(),
        due_date: "2024-06-01".to_string(),
        actual_return_date: String::new(),
        cust_user_id: cust_user_id.to_string(),
    }
}

pub fn sample_review(comments: &str, ratings: i32) -> ReviewDetails {
    ReviewDetails {
        comments: comments.to_string(),
        ratings,
    }
}

/// Configuration for console tests: no table dumps, quiet logging
pub fn create_test_config() -> Config {
    Config {
        log_level: "error".to_string(), // Reduce log noise in tests
        log_ansi: false,
        show_tables: false,
    }
}
