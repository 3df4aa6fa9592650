//! Employee Gateway - REST façade over the mock employee service
//!
//! Proxies list, search, lookup, create and delete calls to the upstream,
//! retrying rate-limited requests and caching the employee list.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use api::{create_router, AppState};
pub use config::Config;
pub use service::EmployeeService;
