//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `GET /api/v1/employee` - List all employees
//! - `GET /api/v1/employee/search/:search_string` - Search by name fragment
//! - `GET /api/v1/employee/:id` - Get one employee
//! - `GET /api/v1/employee/highestSalary` - Highest salary
//! - `GET /api/v1/employee/topTenHighestEarningEmployeeNames` - Top earners
//! - `POST /api/v1/employee` - Create an employee
//! - `DELETE /api/v1/employee/:id` - Delete an employee
//! - `GET /health` - Health check endpoint
//! - `GET|DELETE /admin/cache` - Inspect or clear the employee list cache

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, EMPLOYEE_BASE_PATH};
