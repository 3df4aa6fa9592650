//! Data models for the employee gateway
//!
//! Employee records and input, the upstream envelope, the bodies we send
//! upstream, and the DTOs for our own auxiliary endpoints.

pub mod employee;
pub mod envelope;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use employee::{CreateEmployeeInput, Employee, MAX_AGE, MIN_AGE};
pub use envelope::{Envelope, EnvelopeStatus};
pub use requests::{CreateEmployeeRequest, DeleteEmployeeRequest};
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, MessageResponse};
