//! Booking backend API adapter

pub mod client;
pub mod models;

pub use client::{ApiClient, HealthCheck};
pub use models::{is_success_code, ApiResponse, Endpoint, SERVER_NOT_RESPONDING};
