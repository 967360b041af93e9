//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the labkit configuration file.

use crate::cli::exit_code;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Backend: {}", config.api.base_url);
        println!(
            "  Liveness: {} every {}s",
            config.liveness.endpoint, config.liveness.interval_seconds
        );
        println!("  Normalize Case: {}", config.validation.normalize_case);
        println!(
            "  Require Leading Zero: {}",
            config.validation.require_leading_zero
        );
        println!("  Verbose Reasons: {}", config.validation.verbose_reasons);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(exit_code::SUCCESS)
    }
}
