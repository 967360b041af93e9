//! HTTP client for the booking backend
//!
//! One request per call: no retries and no timeout. A request that cannot
//! be delivered, or whose body is not the expected envelope, comes back as
//! a synthetic [`ApiResponse`] instead of an error, so callers see network
//! failures through the same coded channel as backend failures.

use super::models::{ApiResponse, Endpoint};
use crate::config::ApiConfig;
use crate::domain::{ApiError, Reservation, Result};
use crate::ui::notification::{Notification, Notifier};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

/// Anything that can answer a health check
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Call `endpoint` once and return the coded response
    async fn check(&self, endpoint: &str) -> ApiResponse;
}

/// Booking backend client
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL does not parse, and
    /// [`ApiError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        // Endpoint names are joined onto the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build the URL of `endpoint` with query parameters
    pub fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, endpoint),
                reason: e.to_string(),
            })?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Issue one request and return the backend envelope
    ///
    /// # Errors
    ///
    /// Only request construction fails: an unsupported method or an
    /// endpoint that does not form a URL. Transport and decoding failures
    /// become 503 and 500 responses.
    pub async fn execute(
        &self,
        method: &str,
        endpoint: &str,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let method = parse_method(method)?;
        let url = self.endpoint_url(endpoint, params)?;

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Backend did not respond");
                return Ok(ApiResponse::unavailable());
            }
        };

        let envelope = match response.json::<ApiResponse>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Unexpected response body");
                ApiResponse::invalid_body(e)
            }
        };

        crate::log_api_call!(method, url, envelope.code);
        Ok(envelope)
    }

    /// Call a known endpoint with its default method
    pub async fn call(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        self.execute(endpoint.method(), endpoint.path(), params, body)
            .await
    }

    /// Call a known endpoint, push a notification, and return its data
    ///
    /// Success pushes a success notification and yields `response_data`;
    /// anything else pushes an error notification with the backend message
    /// and yields `None`.
    pub async fn call_and_notify(
        &self,
        notifier: &dyn Notifier,
        endpoint: Endpoint,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let response = self.call(endpoint, params, body).await?;

        if response.is_success() {
            notifier.push(Notification::success("Operation completed successfully"));
            Ok(response.response_data)
        } else {
            let message = response.error_message.as_deref().unwrap_or("unknown error");
            notifier.push(Notification::error(format!("Error: {message}")));
            Ok(None)
        }
    }

    pub async fn get_reservation(&self, id: i64) -> Result<ApiResponse> {
        let id = id.to_string();
        self.call(Endpoint::GetReservation, &[("id", id.as_str())], None)
            .await
    }

    pub async fn list_reservations(&self) -> Result<ApiResponse> {
        self.call(Endpoint::ListReservations, &[], None).await
    }

    pub async fn add_reservation(&self, reservation: &Reservation) -> Result<ApiResponse> {
        let body = serde_json::to_value(reservation)?;
        self.call(Endpoint::AddReservation, &[], Some(&body)).await
    }

    pub async fn update_reservation(&self, reservation: &Reservation) -> Result<ApiResponse> {
        let body = serde_json::to_value(reservation)?;
        self.call(Endpoint::UpdateReservation, &[], Some(&body))
            .await
    }

    pub async fn delete_reservation(&self, id: i64) -> Result<ApiResponse> {
        let id = id.to_string();
        self.call(Endpoint::DeleteReservation, &[("id", id.as_str())], None)
            .await
    }
}

#[async_trait]
impl HealthCheck for ApiClient {
    async fn check(&self, endpoint: &str) -> ApiResponse {
        match self.execute("GET", endpoint, &[], None).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(endpoint, error = %e, "Health check request could not be built");
                ApiResponse::invalid_body(e)
            }
        }
    }
}

/// Parse an HTTP method name, case-insensitively
fn parse_method(name: &str) -> Result<Method> {
    match name.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        other => Err(ApiError::InvalidMethod(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LabError;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(
            client("http://127.0.0.1:5000/api").base_url(),
            "http://127.0.0.1:5000/api/"
        );
        assert_eq!(
            client("http://127.0.0.1:5000/api/").base_url(),
            "http://127.0.0.1:5000/api/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(&ApiConfig {
            base_url: "::not a url".to_string(),
        });
        assert!(matches!(
            result,
            Err(LabError::Api(ApiError::InvalidUrl { .. }))
        ));
    }

    #[test]
    fn test_endpoint_url_without_params() {
        let url = client("http://127.0.0.1:5000/api/")
            .endpoint_url("getListaPrenotazioni", &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/getListaPrenotazioni");
    }

    #[test]
    fn test_endpoint_url_encodes_params() {
        let url = client("http://127.0.0.1:5000/api/")
            .endpoint_url("/getPrenotazione", &[("id", "42"), ("cf", "A&B=C")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/getPrenotazione?id=42&cf=A%26B%3DC"
        );
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("get").unwrap(), Method::GET);
        assert_eq!(parse_method("Delete").unwrap(), Method::DELETE);
        assert!(matches!(
            parse_method("brew"),
            Err(LabError::Api(ApiError::InvalidMethod(m))) if m == "BREW"
        ));
    }
}
