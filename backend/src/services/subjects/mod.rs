//! # Subject Service
//!
//! CRUD over the curriculum catalogue under `/subjects`. The admin UI only
//! lists subjects; the write routes exist so the catalogue can be managed
//! through the API.

mod create;
mod delete;
mod get;
mod list;
pub(crate) mod queries;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;
use common::model::subject::NewSubject;

use crate::error::ServiceError;

const API_PATH: &str = "/subjects";

/// Registered routes:
///
/// * `GET /` and `POST /`
/// * `GET /{id}`, `PUT /{id}`, `DELETE /{id}`
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

fn validate(payload: &NewSubject) -> Result<String, ServiceError> {
    let name = payload.name.trim();
    if name.is_empty() || payload.year == 0 {
        return Err(ServiceError::Validation(
            "nome e ano da matéria são obrigatórios".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("matéria não encontrada".to_string())
}
