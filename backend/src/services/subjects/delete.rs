use actix_web::{web, HttpResponse};
use log::info;

use super::{not_found, queries};
use crate::db::Db;
use crate::error::ServiceError;

/// Deleting a subject also drops it from every student (cascade).
pub async fn process(db: web::Data<Db>, id: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    if !db.with(|conn| Ok(queries::delete(conn, &id)?))? {
        return Err(not_found());
    }
    info!("Matéria removida: {}", id);
    Ok(HttpResponse::NoContent().finish())
}
