//! Request and response models of the booking backend

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Message used when the backend cannot be reached
pub const SERVER_NOT_RESPONDING: &str = "server not responding";

/// Response envelope returned by every backend endpoint
///
/// `code` is the backend's own status code carried in the body, not the
/// HTTP status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,

    #[serde(default)]
    pub response_data: Option<Value>,

    #[serde(default)]
    pub error_message: Option<String>,
}

impl ApiResponse {
    /// Successful response carrying `data`
    pub fn ok(data: Value) -> Self {
        Self {
            code: 200,
            response_data: Some(data),
            error_message: None,
        }
    }

    /// Synthetic response for a transport failure
    pub fn unavailable() -> Self {
        Self {
            code: 503,
            response_data: None,
            error_message: Some(SERVER_NOT_RESPONDING.to_string()),
        }
    }

    /// Synthetic response for a body that is not the expected envelope
    pub fn invalid_body(detail: impl fmt::Display) -> Self {
        Self {
            code: 500,
            response_data: None,
            error_message: Some(format!("invalid response from server: {detail}")),
        }
    }

    /// Whether `code` is in the 2xx range
    pub fn is_success(&self) -> bool {
        is_success_code(self.code)
    }

    /// Decode `response_data` into `T`
    ///
    /// Returns `None` when the response failed, carries no data, or the data
    /// has a different shape.
    pub fn data<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.is_success() {
            return None;
        }
        self.response_data
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}

/// Whether an HTTP-style code denotes success
pub fn is_success_code(code: u16) -> bool {
    (200..=299).contains(&code)
}

/// Endpoints exposed by the booking backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetReservation,
    ListReservations,
    DeleteReservation,
    AddReservation,
    UpdateReservation,
    Ping,
}

impl Endpoint {
    /// Path segment appended to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::GetReservation => "getPrenotazione",
            Self::ListReservations => "getListaPrenotazioni",
            Self::DeleteReservation => "deletePrenotazione",
            Self::AddReservation => "addPrenotazione",
            Self::UpdateReservation => "updatePrenotazione",
            Self::Ping => "ping",
        }
    }

    /// HTTP method the backend expects
    pub fn method(&self) -> &'static str {
        match self {
            Self::GetReservation | Self::ListReservations | Self::Ping => "GET",
            Self::DeleteReservation => "DELETE",
            Self::AddReservation | Self::UpdateReservation => "POST",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_range() {
        assert!(is_success_code(200));
        assert!(is_success_code(204));
        assert!(is_success_code(299));
        assert!(!is_success_code(199));
        assert!(!is_success_code(300));
        assert!(!is_success_code(503));
    }

    #[test]
    fn test_unavailable_shape() {
        let response = ApiResponse::unavailable();
        assert_eq!(response.code, 503);
        assert_eq!(response.error_message.as_deref(), Some(SERVER_NOT_RESPONDING));
        assert!(!response.is_success());
    }

    #[test]
    fn test_deserialize_partial_envelope() {
        let response: ApiResponse = serde_json::from_value(json!({"code": 404})).unwrap();
        assert_eq!(response.code, 404);
        assert!(response.response_data.is_none());
        assert!(response.error_message.is_none());

        let response: ApiResponse = serde_json::from_value(json!({
            "code": 200,
            "error_message": null,
            "response_data": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(response.data::<Vec<u8>>(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_data_ignored_on_failure() {
        let response = ApiResponse {
            code: 400,
            response_data: Some(json!(1)),
            error_message: Some("bad request".to_string()),
        };
        assert_eq!(response.data::<i32>(), None);
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::ListReservations.path(), "getListaPrenotazioni");
        assert_eq!(Endpoint::Ping.to_string(), "ping");
        assert_eq!(Endpoint::DeleteReservation.method(), "DELETE");
        assert_eq!(Endpoint::AddReservation.method(), "POST");
    }
}
