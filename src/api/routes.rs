//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_employee_handler, delete_employee_handler, get_employee_handler,
    health_handler, highest_salary_handler, invalidate_cache_handler, list_employees_handler,
    search_employees_handler, top_ten_handler, AppState,
};

/// Prefix of every employee endpoint
pub const EMPLOYEE_BASE_PATH: &str = "/api/v1/employee";

/// Creates the main router with all endpoints configured.
///
/// Static segments such as `/highestSalary` take precedence over `/:id`.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            EMPLOYEE_BASE_PATH,
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/api/v1/employee/search/:search_string",
            get(search_employees_handler),
        )
        .route(
            "/api/v1/employee/highestSalary",
            get(highest_salary_handler),
        )
        .route(
            "/api/v1/employee/topTenHighestEarningEmployeeNames",
            get(top_ten_handler),
        )
        .route(
            "/api/v1/employee/:id",
            get(get_employee_handler).delete(delete_employee_handler),
        )
        .route("/health", get(health_handler))
        .route(
            "/admin/cache",
            get(cache_stats_handler).delete(invalidate_cache_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
