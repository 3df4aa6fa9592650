//! Employee Models
//!
//! The employee record as exposed by the upstream service, and the input
//! accepted when creating one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Bounds ==
/// Youngest age accepted on create
pub const MIN_AGE: i64 = 16;

/// Oldest age accepted on create
pub const MAX_AGE: i64 = 75;

// == Employee ==
/// An employee record owned by the upstream service.
///
/// Field names on the wire follow the upstream's `employee_*` convention and
/// are passed through unchanged to our own clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: u64,
    #[serde(rename = "employee_age")]
    pub age: u32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email", default)]
    pub email: String,
}

// == Create Employee Input ==
/// Request body for POST /api/v1/employee
///
/// Every field is optional at the serde level so that an incomplete payload
/// reaches `validate` and is reported as invalid input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEmployeeInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
}

impl CreateEmployeeInput {
    /// Validates the input.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be blank".to_string());
        }
        if self.title.trim().is_empty() {
            return Some("Title cannot be blank".to_string());
        }
        match self.salary {
            Some(salary) if salary > 0 => {}
            Some(_) => return Some("Salary must be greater than zero".to_string()),
            None => return Some("Salary is required".to_string()),
        }
        match self.age {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
            Some(_) => {
                return Some(format!(
                    "Age must be between {} and {}",
                    MIN_AGE, MAX_AGE
                ))
            }
            None => return Some("Age is required".to_string()),
        }
        None
    }
}
