// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;

use crate::model::traits::Entity;
use crate::model::validation::{require_non_blank, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    /// Caller-supplied social security number
    pub ssn: String,

    #[serde(flatten)]
    pub details: EmployeeDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub name: String,
    pub phone_number: String,
    pub sex: String,
    pub salary: i32,
}

impl Entity for Employee {
    type Key = String;
    type Details = EmployeeDetails;

    const NAME: &'static str = "employee";
    const KEY_FIELD: &'static str = "ssn";

    fn key(&self) -> &String {
        &self.ssn
    }

    fn from_parts(ssn: String, details: EmployeeDetails) -> ValidationResult<Self> {
        require_non_blank("ssn", &ssn)?;
        Ok(Self { ssn, details })
    }
}
