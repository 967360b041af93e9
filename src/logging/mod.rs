//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON file output with rotation
//! - Level from configuration, overridable with `RUST_LOG`
//!
//! Fiscal codes and health card codes are personal data and are never
//! passed to these macros. Validation logs carry only rejection tags.
//!
//! # Example
//!
//! ```no_run
//! use labkit::logging::init_logging;
//! use labkit::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard, LOG_FILE_NAME};

/// Log a completed backend call
///
/// # Example
///
/// ```no_run
/// use labkit::log_api_call;
///
/// log_api_call!("GET", "http://127.0.0.1:5000/api/ping", 200);
/// ```
#[macro_export]
macro_rules! log_api_call {
    ($method:expr, $url:expr, $code:expr) => {
        tracing::debug!(
            method = %$method,
            url = %$url,
            code = $code,
            "Backend call completed"
        );
    };
}

/// Log a change of backend liveness
///
/// # Example
///
/// ```no_run
/// use labkit::log_liveness_change;
///
/// log_liveness_change!("offline", "online");
/// ```
#[macro_export]
macro_rules! log_liveness_change {
    ($from:expr, $to:expr) => {
        tracing::info!(
            from = %$from,
            to = %$to,
            "Backend liveness changed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use labkit::log_error_with_context;
/// use labkit::domain::LabError;
///
/// let error = LabError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
