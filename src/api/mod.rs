use reqwest::Response;
use serde::Deserialize;

use crate::config::Config;
use crate::error::ApiError;

pub mod auth;
pub mod files;
pub mod submissions;
pub mod users;

/// Error bodies carry an optional `message` field.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the HR REST API. Cheap to clone; all calls share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self::with_http(reqwest::Client::new(), &config.api_base_url)
    }

    /// Build around an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Normalize a non-success response into the message the operator sees:
    /// the body's `message` field when present, else `fallback`.
    pub(crate) async fn into_result(
        response: Response,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string());

        Err(ApiError::Api { status, message })
    }
}
