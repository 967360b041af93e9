//! Domain error types
//!
//! This module defines the error hierarchy for labkit. Validation of user
//! input is never reported through these types: a malformed fiscal code is
//! an ordinary [`ValidationOutcome`](crate::validation::ValidationOutcome).
//! `LabError` covers the failures of the program itself (bad configuration,
//! unusable API settings, I/O).

use thiserror::Error;

/// Main labkit error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum LabError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// API client setup errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A validated value was required but the input was rejected
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// API client errors
///
/// These are raised while *building* a request, before anything is sent.
/// Transport failures are not errors: the client turns them into a coded
/// [`ApiResponse`](crate::adapters::api::ApiResponse).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be parsed
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP method is not one the backend understands
    #[error("Unsupported HTTP method: {0}")]
    InvalidMethod(String),

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LabError {
    fn from(err: std::io::Error) -> Self {
        LabError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LabError {
    fn from(err: serde_json::Error) -> Self {
        LabError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LabError {
    fn from(err: toml::de::Error) -> Self {
        LabError::Configuration(format!("TOML parse error: {err}"))
    }
}
