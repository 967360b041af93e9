//! Backend availability checks
//!
//! ```rust,no_run
//! use labkit::adapters::api::ApiClient;
//! use labkit::config::load_config;
//! use labkit::core::liveness::LivenessProber;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("labkit.toml")?;
//! let client = Arc::new(ApiClient::new(&config.api)?);
//! let prober = LivenessProber::new(client, &config.liveness);
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! prober
//!     .spawn(shutdown_rx, |liveness| println!("backend is {liveness}"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod prober;
pub mod status;

pub use prober::LivenessProber;
pub use status::Liveness;
