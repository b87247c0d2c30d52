//! # Teacher Service
//!
//! Teacher records under `/teachers`. The registry (`COMP-001`) is derived
//! from the department on create and is read-only afterwards.

mod create;
mod delete;
mod get;
mod list;
mod queries;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

use crate::error::ServiceError;

const API_PATH: &str = "/teachers";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

fn validate(name: &str, department: &str) -> Result<(String, String), ServiceError> {
    let (name, department) = (name.trim(), department.trim());
    if name.is_empty() || department.is_empty() {
        return Err(ServiceError::Validation(
            "nome e departamento do professor são obrigatórios".to_string(),
        ));
    }
    Ok((name.to_string(), department.to_string()))
}
