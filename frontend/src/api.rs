//! Browser transport for the API client, built on `gloo-net`.

use client::{ApiError, ApiRequest, ApiResponse, Method, Transport};
use gloo_net::http::Request;

/// Origin used when the build does not set `API_BASE_URL`. Empty means
/// requests go to the origin that served the page, which is how the backend
/// ships the UI.
pub const DEFAULT_API_BASE_URL: &str = "";

/// Sends requests with `fetch` against a fixed origin.
#[derive(Clone, Debug, PartialEq)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Origin baked in at build time through `API_BASE_URL`, for builds whose
    /// page is not served by the backend itself.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let prepared = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Transport(err.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        let status_text = response.status_text();
        // A bodyless 204 reads as an empty string.
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(ApiResponse {
            status,
            status_text,
            body,
        })
    }
}
