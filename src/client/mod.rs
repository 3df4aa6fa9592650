//! Upstream Client Module
//!
//! Talks to the upstream employee service. Every call goes through a
//! `RetryPolicy` that retries HTTP 429 responses and nothing else.

mod http;
mod retry;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ClientResult;
use crate::models::{CreateEmployeeInput, Employee};

pub use http::HttpEmployeeClient;
pub use retry::{Backoff, RetryPolicy};

/// Operations offered by the upstream employee service.
///
/// Each returns the envelope payload, `None` when the upstream handled the
/// request without data.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// GET {base}
    async fn list_employees(&self) -> ClientResult<Option<Vec<Employee>>>;

    /// GET {base}/{id}; an upstream 404 is `Ok(None)`
    async fn get_employee(&self, id: &Uuid) -> ClientResult<Option<Employee>>;

    /// POST {base}
    async fn create_employee(&self, input: &CreateEmployeeInput) -> ClientResult<Option<Employee>>;

    /// DELETE {base} with `{"name": ...}`
    async fn delete_employee(&self, name: &str) -> ClientResult<Option<bool>>;
}
