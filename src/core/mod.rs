//! Background services for labkit.
//!
//! # Modules
//!
//! - [`liveness`] - Periodic ping of the booking backend

pub mod liveness;
