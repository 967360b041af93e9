//! Configuration management for labkit.
//!
//! labkit reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LAB_<SECTION>_<KEY>` environment overrides
//! - Default values for every section except `[api]`
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "http://127.0.0.1:5000/api/"
//!
//! [liveness]
//! interval_seconds = 15
//!
//! [validation]
//! normalize_case = true
//! require_leading_zero = true
//! verbose_reasons = true
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use labkit::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("labkit.toml")?;
//! println!("Backend: {}", config.api.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{ApiConfig, ApplicationConfig, LabConfig, LivenessConfig, LoggingConfig};
