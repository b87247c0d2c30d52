//! Error types for the API client.

use common::requests::ErrorBody;
use thiserror::Error;

use crate::transport::ApiResponse;

/// Message used when an error response carries no readable body.
pub const UNKNOWN_API_ERROR: &str = "Erro desconhecido da API";

/// Errors surfaced by API calls.
///
/// `Display` renders only the human-readable part, so workflows can embed it
/// directly in feedback text (`"Erro ao atualizar aluno: not found"`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Request {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, status phrase, or a generic fallback.
        message: String,
    },

    /// The request never produced a status (network failure, aborted fetch).
    #[error("{0}")]
    Transport(String),

    /// A body could not be encoded or a success body could not be decoded.
    #[error("resposta inválida da API: {0}")]
    Json(String),
}

impl ApiError {
    /// HTTP status, when the server got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(_) | Self::Json(_) => None,
        }
    }

    /// Builds the error for a non-success response, reading the error body
    /// defensively.
    ///
    /// The `message` field wins when present and non-empty; a parseable body
    /// without it falls back to the status phrase; a body that does not parse
    /// at all yields [`UNKNOWN_API_ERROR`].
    pub fn from_response(response: &ApiResponse) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(&response.body) {
            Ok(ErrorBody {
                message: Some(message),
            }) if !message.is_empty() => message,
            Ok(_) => status_phrase(response),
            Err(_) => UNKNOWN_API_ERROR.to_string(),
        };
        Self::Request {
            status: response.status,
            message,
        }
    }

    /// Builds the error for a non-success response without touching the body.
    pub fn from_status(response: &ApiResponse) -> Self {
        Self::Request {
            status: response.status,
            message: status_phrase(response),
        }
    }
}

fn status_phrase(response: &ApiResponse) -> String {
    if response.status_text.is_empty() {
        format!("HTTP error! status: {}", response.status)
    } else {
        response.status_text.clone()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for API calls.
pub type Result<T> = std::result::Result<T, ApiError>;
