//! HTTP Employee Client
//!
//! reqwest-backed implementation of `EmployeeApi`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use super::{EmployeeApi, RetryPolicy};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    CreateEmployeeInput, CreateEmployeeRequest, DeleteEmployeeRequest, Employee, Envelope,
};

/// Upstream client bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpEmployeeClient {
    /// Creates a client for `base_url`, e.g. `http://localhost:8112/api/v1/employee`.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> ClientResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            retry,
        })
    }

    /// Creates a client from the gateway configuration.
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        Self::new(
            config.employee_server_url.clone(),
            config.request_timeout(),
            config.retry_policy(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == Send ==
    /// Sends one request and unwraps the envelope.
    ///
    /// A 429 becomes `TooManyRequests` so the retry policy can see it.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<Option<T>> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Upstream responded with {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::TooManyRequests);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))?;
        envelope.into_result().map_err(ClientError::Envelope)
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeClient {
    async fn list_employees(&self) -> ClientResult<Option<Vec<Employee>>> {
        debug!("GET {}", self.base_url);
        self.retry
            .run("list_employees", || self.send(self.http.get(&self.base_url)))
            .await
    }

    async fn get_employee(&self, id: &Uuid) -> ClientResult<Option<Employee>> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("GET {}", url);
        let result = self
            .retry
            .run("get_employee", || self.send(self.http.get(&url)))
            .await;

        match result {
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND => Ok(None),
            other => other,
        }
    }

    async fn create_employee(&self, input: &CreateEmployeeInput) -> ClientResult<Option<Employee>> {
        let body = CreateEmployeeRequest::from_input(input);
        debug!("POST {} name={}", self.base_url, body.name);
        self.retry
            .run("create_employee", || {
                self.send(self.http.post(&self.base_url).json(&body))
            })
            .await
    }

    async fn delete_employee(&self, name: &str) -> ClientResult<Option<bool>> {
        let body = DeleteEmployeeRequest { name };
        debug!("DELETE {} name={}", self.base_url, name);
        self.retry
            .run("delete_employee", || {
                self.send(self.http.delete(&self.base_url).json(&body))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpEmployeeClient::new(
            "http://localhost:8112/api/v1/employee/",
            Duration::from_secs(1),
            RetryPolicy::no_retry(),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8112/api/v1/employee");
    }

    #[test]
    fn test_from_config() {
        let client = HttpEmployeeClient::from_config(&Config::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8112/api/v1/employee");
        assert_eq!(client.retry.max_attempts(), 4);
    }
}
