//! The seam between the API client and whatever actually speaks HTTP.
//!
//! The browser build implements [`Transport`] over `gloo-net`; tests implement
//! it in memory. Requests and responses are plain data so both sides stay
//! trivial.

use serde::Serialize;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing request. `path` is relative to the API base origin and
/// `body`, when present, is JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attaches `payload` encoded as JSON.
    pub fn json<P: Serialize + ?Sized>(mut self, payload: &P) -> Result<Self> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self)
    }
}

/// A response as seen by the client: status line plus the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// Reason phrase reported by the transport; may be empty (HTTP/2).
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends [`ApiRequest`]s somewhere and hands back the [`ApiResponse`].
///
/// A response with any status is `Ok`; only failures that prevent a status
/// from being obtained are `Err`, and those should be reported as
/// [`ApiError::Transport`].
#[allow(async_fn_in_trait)]
pub trait Transport: Clone {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, ApiError>;
}
