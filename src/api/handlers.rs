//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::client::{EmployeeApi, HttpEmployeeClient};
use crate::config::Config;
use crate::error::{ApiError, ClientResult, Result};
use crate::models::{
    CacheStatsResponse, CreateEmployeeInput, Employee, HealthResponse, MessageResponse,
};
use crate::service::EmployeeService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmployeeService>,
}

impl AppState {
    /// Creates a new AppState with the given service.
    pub fn new(service: EmployeeService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState around any upstream implementation.
    pub fn with_client(client: Arc<dyn EmployeeApi>, config: &Config) -> Self {
        Self::new(EmployeeService::new(client, config.cache_policy()))
    }

    /// Creates a new AppState from configuration, talking HTTP to the upstream.
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let client = HttpEmployeeClient::from_config(config)?;
        Ok(Self::with_client(Arc::new(client), config))
    }
}

/// Handler for GET /api/v1/employee
pub async fn list_employees_handler(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    let employees = state.service.get_all_employees().await?;
    info!("Retrieved {} employees successfully", employees.len());
    Ok(Json(employees))
}

/// Handler for GET /api/v1/employee/search/:search_string
pub async fn search_employees_handler(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    let employees = state.service.get_employees_by_name_search(&search).await?;
    Ok(Json(employees))
}

/// Handler for GET /api/v1/employee/:id
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    state
        .service
        .get_employee_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", id)))
}

/// Handler for GET /api/v1/employee/highestSalary
pub async fn highest_salary_handler(State(state): State<AppState>) -> Result<Json<u64>> {
    let highest = state.service.get_highest_salary_of_employees().await?;
    info!("Highest salary calculated: {}", highest);
    Ok(Json(highest))
}

/// Handler for GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn top_ten_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let names = state
        .service
        .get_top_ten_highest_earning_employee_names()
        .await?;
    Ok(Json(names))
}

/// Handler for POST /api/v1/employee
///
/// A body that does not parse as JSON is reported as invalid input rather
/// than axum's default rejection.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateEmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>)> {
    let Json(input) = payload.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let created = state.service.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for DELETE /api/v1/employee/:id
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<String>> {
    let name = state.service.delete_employee_by_id(&id).await?;
    Ok(Json(name))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /admin/cache
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.service.cache_stats().await;

    Json(CacheStatsResponse::new(
        stats.hits,
        stats.refreshes,
        stats.invalidations,
        stats.total_entries,
    ))
}

/// Handler for DELETE /admin/cache
pub async fn invalidate_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.service.invalidate_cache().await;
    info!("Employee cache invalidated");
    Json(MessageResponse::new("Cache invalidated"))
}
