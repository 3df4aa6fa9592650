//! Upstream Request Bodies
//!
//! JSON bodies sent to the upstream employee service.

use serde::Serialize;

use crate::models::CreateEmployeeInput;

/// Body for `POST {base_url}`
#[derive(Debug, Clone, Serialize)]
pub struct CreateEmployeeRequest<'a> {
    pub name: &'a str,
    pub salary: i64,
    pub age: i64,
    pub title: &'a str,
    pub email: &'a str,
}

impl<'a> CreateEmployeeRequest<'a> {
    /// Builds the upstream body from already validated input.
    ///
    /// Missing numeric fields fall back to zero; callers validate first.
    pub fn from_input(input: &'a CreateEmployeeInput) -> Self {
        Self {
            name: input.name.trim(),
            salary: input.salary.unwrap_or_default(),
            age: input.age.unwrap_or_default(),
            title: input.title.trim(),
            email: input.email.trim(),
        }
    }
}

/// Body for `DELETE {base_url}`; the upstream deletes by name.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteEmployeeRequest<'a> {
    pub name: &'a str,
}
