//! Domain models and types for labkit.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Error types** ([`LabError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//! - **Booking payload** ([`Reservation`]) with field validation
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T>`](Result). Rejected user input
//! is not an error: validators return a
//! [`ValidationOutcome`](crate::validation::ValidationOutcome), and only
//! [`Reservation::into_validated`] lifts rejections into
//! [`LabError::Validation`] for callers that need a hard stop.
//!
//! ```rust
//! use labkit::domain::Reservation;
//! use labkit::validation::Validator;
//!
//! fn submit(reservation: Reservation) -> labkit::domain::Result<Reservation> {
//!     let reservation = reservation.into_validated(&Validator::default())?;
//!     Ok(reservation)
//! }
//! ```

pub mod errors;
pub mod reservation;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ApiError, LabError};
pub use reservation::{FieldError, Reservation};
pub use result::Result;
