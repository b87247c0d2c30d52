use actix_web::{web, HttpResponse};

use super::queries;
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(db: web::Data<Db>, id: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let student = db
        .with(|conn| Ok(queries::find(conn, &id)?))?
        .ok_or_else(|| ServiceError::NotFound("aluno não encontrado".to_string()))?;
    Ok(HttpResponse::Ok().json(student))
}
