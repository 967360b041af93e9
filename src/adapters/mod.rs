//! External system integrations for labkit.
//!
//! - [`api`] - Booking backend over its JSON request/response convention
//!
//! # Example
//!
//! ```rust,no_run
//! use labkit::adapters::api::{ApiClient, Endpoint};
//! use labkit::config::ApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(&ApiConfig::default())?;
//! let response = client.call(Endpoint::ListReservations, &[], None).await?;
//! if response.is_success() {
//!     println!("{:?}", response.response_data);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
