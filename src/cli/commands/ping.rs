//! Ping command implementation

use super::load_backend_settings;
use crate::adapters::api::ApiClient;
use crate::cli::exit_code;
use crate::core::liveness::{Liveness, LivenessProber};
use clap::Args;
use std::sync::Arc;

/// Arguments for the ping command
#[derive(Args, Debug)]
pub struct PingArgs {
    /// Backend base URL, overriding the configuration
    #[arg(long)]
    pub base_url: Option<String>,
}

impl PingArgs {
    /// Execute the ping command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (mut api, liveness) = match load_backend_settings(config_path) {
            Ok(settings) => settings,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };
        if let Some(base_url) = &self.base_url {
            api.base_url = base_url.clone();
        }

        let client = match ApiClient::new(&api) {
            Ok(client) => client,
            Err(e) => {
                println!("❌ Invalid backend configuration");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        println!("📡 Pinging {}{}", client.base_url(), liveness.endpoint);
        let prober = LivenessProber::new(Arc::new(client), &liveness);

        match prober.probe().await {
            Liveness::Online => {
                println!("✅ Backend is online");
                Ok(exit_code::SUCCESS)
            }
            Liveness::Offline => {
                println!("❌ Backend is offline");
                Ok(exit_code::FAILURE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_invalid_base_url_is_config_error() {
        let args = PingArgs {
            base_url: Some("::not a url".to_string()),
        };
        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, exit_code::CONFIG_ERROR);
    }
}
