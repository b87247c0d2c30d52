use actix_web::{web, HttpResponse};
use log::info;

use super::queries;
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(db: web::Data<Db>, id: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    if !db.with(|conn| Ok(queries::delete(conn, &id)?))? {
        return Err(ServiceError::NotFound("professor não encontrado para exclusão".to_string()));
    }
    info!("Professor removido: {}", id);
    Ok(HttpResponse::NoContent().finish())
}
