//! Watch command implementation
//!
//! Runs the liveness prober in the foreground and prints every probe
//! until a shutdown signal arrives.

use super::load_backend_settings;
use crate::adapters::api::ApiClient;
use crate::cli::exit_code;
use crate::core::liveness::{Liveness, LivenessProber};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Arguments for the watch command
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between pings, overriding the configuration
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_seconds: Option<u64>,
}

impl WatchArgs {
    /// Execute the watch command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let (api, liveness) = match load_backend_settings(config_path) {
            Ok(settings) => settings,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        let client = match ApiClient::new(&api) {
            Ok(client) => client,
            Err(e) => {
                println!("❌ Invalid backend configuration");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        let mut prober = LivenessProber::new(Arc::new(client), &liveness);
        if let Some(seconds) = self.interval_seconds {
            prober = prober.with_interval(Duration::from_secs(seconds));
        }

        println!(
            "👀 Watching {}{} every {}s (Ctrl+C to stop)",
            api.base_url,
            prober.endpoint(),
            prober.interval().as_secs()
        );

        let handle = prober.spawn(shutdown_signal, |liveness| {
            let now = chrono::Local::now().format("%H:%M:%S");
            match liveness {
                Liveness::Online => println!("[{now}] ✅ online"),
                Liveness::Offline => println!("[{now}] ❌ offline"),
            }
        });

        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Liveness task failed");
            return Ok(exit_code::FATAL);
        }

        println!("👋 Stopped watching");
        Ok(exit_code::SUCCESS)
    }
}
