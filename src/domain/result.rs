//! Result type alias for labkit

use super::errors::LabError;

/// Result type alias for labkit operations
///
/// # Examples
///
/// ```
/// use labkit::domain::result::Result;
/// use labkit::domain::errors::LabError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LabError::Configuration("missing [api] section".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LabError>;
