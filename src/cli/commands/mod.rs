//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod check;
pub mod init;
pub mod ping;
pub mod validate;
pub mod watch;

use crate::config::{load_config, ApiConfig, LabConfig, LivenessConfig};
use std::path::Path;

/// Load the configuration if the file exists
///
/// A missing file is not an error for commands that work offline. A file
/// that exists but does not load is.
pub(crate) fn load_optional_config(config_path: &str) -> crate::domain::Result<Option<LabConfig>> {
    if Path::new(config_path).exists() {
        load_config(config_path).map(Some)
    } else {
        tracing::debug!(config_path = %config_path, "No configuration file, using defaults");
        Ok(None)
    }
}

/// Backend and liveness settings, defaulted when there is no file
pub(crate) fn load_backend_settings(
    config_path: &str,
) -> crate::domain::Result<(ApiConfig, LivenessConfig)> {
    Ok(match load_optional_config(config_path)? {
        Some(config) => (config.api, config.liveness),
        None => (ApiConfig::default(), LivenessConfig::default()),
    })
}
