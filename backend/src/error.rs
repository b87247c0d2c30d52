//! Service errors and their HTTP mapping.
//!
//! Every failure leaves the server as `{"message": "..."}` with a status that
//! matches the error kind, including malformed JSON bodies (see [`json_config`]).

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use common::requests::ErrorBody;
use log::{error, warn};
use thiserror::Error;

/// Largest JSON body accepted by any route.
const JSON_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input, including attempts to change a
    /// server-assigned code.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The request clashes with existing state (duplicate association).
    #[error("{0}")]
    Conflict(String),

    #[error("erro no banco de dados: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Database(_) | ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        HttpResponse::build(status).json(ErrorBody::new(self.to_string()))
    }
}

/// JSON extractor settings shared by every route: size limit plus a
/// `400 {"message"}` answer for bodies that fail to parse.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            let message = format!("Requisição inválida: {}", err);
            warn!("{}", message);
            InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorBody::new(message))).into()
        })
}
