//! Employee Aggregates
//!
//! Pure computations over a fetched employee list.

use crate::error::{ApiError, Result};
use crate::models::Employee;

/// Number of names returned by the top earners view
pub const TOP_EARNERS_LIMIT: usize = 10;

// == Search Validation ==
/// Trims `search` and accepts it only if it is non-empty ASCII letters.
pub fn validate_search(search: &str) -> Result<&str> {
    let trimmed = search.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput(
            "Search string cannot be empty".to_string(),
        ));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ApiError::InvalidInput(
            "Search string must contain only letters".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Keeps employees whose name contains `needle`, ignoring case.
pub fn filter_by_name(employees: Vec<Employee>, needle: &str) -> Vec<Employee> {
    let needle = needle.to_lowercase();
    employees
        .into_iter()
        .filter(|employee| employee.name.to_lowercase().contains(&needle))
        .collect()
}

/// Highest salary, 0 for an empty list.
pub fn highest_salary(employees: &[Employee]) -> u64 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best paid employees, highest first.
///
/// Ties keep their upstream order.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}
