//! Configuration schema types
//!
//! This module defines the configuration structure for labkit.

use crate::validation::ValidationPolicy;
use serde::{Deserialize, Serialize};
use url::Url;

/// Main labkit configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Booking backend
    pub api: ApiConfig,

    /// Periodic availability check
    #[serde(default)]
    pub liveness: LivenessConfig,

    /// Identity-code validation rules
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LabConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.api.validate()?;
        self.liveness.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Booking backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint name is appended to
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("api.base_url cannot be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid api.base_url '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }
        Ok(())
    }
}

/// Liveness probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessConfig {
    /// Seconds between probes
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,

    /// Endpoint name of the health check
    #[serde(default = "default_ping_endpoint")]
    pub endpoint: String,
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
            endpoint: default_ping_endpoint(),
        }
    }
}

impl LivenessConfig {
    fn validate(&self) -> Result<(), String> {
        if self.interval_seconds == 0 {
            return Err("liveness.interval_seconds must be > 0".to_string());
        }
        if self.endpoint.trim().is_empty() {
            return Err("liveness.endpoint cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api/".to_string()
}

fn default_interval_seconds() -> u64 {
    15
}

fn default_ping_endpoint() -> String {
    "ping".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
