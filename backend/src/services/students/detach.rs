use actix_web::{web, HttpResponse};
use log::info;

use super::queries;
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(db: web::Data<Db>, path: web::Path<(String, String)>) -> Result<HttpResponse, ServiceError> {
    let (student_id, subject_id) = path.into_inner();
    if !db.with(|conn| Ok(queries::detach(conn, &student_id, &subject_id)?))? {
        return Err(ServiceError::NotFound("matéria não associada a este aluno".to_string()));
    }
    info!("Matéria {} removida do aluno {}", subject_id, student_id);
    Ok(HttpResponse::NoContent().finish())
}
