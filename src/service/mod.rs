//! Service Module
//!
//! Input validation and the computed employee views.

pub mod aggregate;
mod employee_service;

#[cfg(test)]
mod property_tests;

pub use aggregate::TOP_EARNERS_LIMIT;
pub use employee_service::{EmployeeService, ALL_EMPLOYEES_KEY};
