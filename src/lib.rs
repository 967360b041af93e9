// labkit - L.A.B. booking client toolkit
// Copyright (c) 2025 L.A.B. Contributors
// Licensed under the MIT License

//! # labkit - L.A.B. booking client toolkit
//!
//! labkit is the client side of the L.A.B. medical-laboratory booking
//! service: it validates the identity documents patients type into the
//! booking form, talks to the booking backend, and watches whether that
//! backend is reachable.
//!
//! ## Overview
//!
//! - **Validating** Italian fiscal codes (16 characters) and health
//!   insurance card codes (20 characters) with one configurable grammar
//!   engine, plus email addresses and blank fields
//! - **Calling** the backend over its `{code, response_data, error_message}`
//!   JSON convention
//! - **Rendering** the shared page chrome and toast notifications
//! - **Probing** backend liveness on a fixed interval
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Background services (liveness prober)
//! - [`adapters`] - Booking backend client
//! - [`validation`] - Identity-code grammar engine and validators
//! - [`domain`] - Error types and the reservation payload
//! - [`ui`] - Notifications, page chrome, date formatting
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use labkit::validation::{validate_fiscal_code, validate_health_card_code};
//!
//! assert!(validate_fiscal_code("RSSMRA85T10A562S").is_valid);
//!
//! let outcome = validate_health_card_code("80380001201234567890");
//! assert!(!outcome.is_valid);
//! assert_eq!(outcome.error.as_deref(), Some("the first character must be 0"));
//! ```
//!
//! ## Policy
//!
//! Case normalization, the health card's leading zero and the wording of
//! rejection messages are set by one [`validation::ValidationPolicy`]:
//!
//! ```rust
//! use labkit::validation::{ValidationPolicy, Validator};
//!
//! let validator = Validator::new(ValidationPolicy::default().with_leading_zero(false));
//! assert!(validator.health_card("80380001201234567890").is_valid);
//! ```
//!
//! ## Backend Calls
//!
//! Transport failures come back as coded responses, not errors:
//!
//! ```rust,no_run
//! use labkit::adapters::api::ApiClient;
//! use labkit::config::ApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(&ApiConfig::default())?;
//! let response = client.list_reservations().await?;
//! if !response.is_success() {
//!     eprintln!("{} {:?}", response.code, response.error_message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! labkit uses the [`domain::LabError`] type for errors outside the
//! validators:
//!
//! ```rust,no_run
//! use labkit::domain::LabError;
//!
//! fn example() -> Result<(), LabError> {
//!     let config = labkit::config::load_config("labkit.toml")?;
//!     println!("{}", config.api.base_url);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod ui;
pub mod validation;
