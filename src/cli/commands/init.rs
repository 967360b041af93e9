//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::exit_code;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "labkit.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing labkit configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(exit_code::CONFIG_ERROR);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set [api] base_url to your booking backend");
                println!("  2. Validate configuration: labkit validate-config");
                println!("  3. Check the backend: labkit ping");
                println!();
                Ok(exit_code::SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(exit_code::FATAL)
            }
        }
    }

    /// Generate the sample configuration
    pub fn generate_config() -> String {
        r#"# labkit Configuration File
# L.A.B. booking client toolkit
#
# Values can reference environment variables as ${VAR_NAME}.
# Every key can also be overridden with LAB_<SECTION>_<KEY>,
# for example LAB_API_BASE_URL.

[application]
# trace, debug, info, warn, error; --log-level takes precedence
log_level = "info"

[api]
# Endpoint names are appended to this URL
base_url = "http://127.0.0.1:5000/api/"

[liveness]
interval_seconds = 15
endpoint = "ping"

[validation]
# Uppercase fiscal codes before checking them
normalize_case = true
# Health card codes carry a leading zero (20 characters including it)
require_leading_zero = true
# Report rejections as sentences instead of tags
verbose_reasons = true

# JSON log file, written by `labkit watch`
[logging]
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_loads() {
        let config = parse_config(&InitArgs::generate_config()).unwrap();
        assert_eq!(config.liveness.interval_seconds, 15);
        assert!(config.validation.require_leading_zero);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("labkit.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), exit_code::CONFIG_ERROR);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), exit_code::SUCCESS);
        assert!(fs::read_to_string(&output).unwrap().contains("[api]"));
    }
}
