use actix_web::{web, HttpResponse};
use log::info;

use super::queries;
use crate::db::Db;
use crate::error::ServiceError;
use crate::services::subjects::queries as subject_queries;

pub async fn process(db: web::Data<Db>, path: web::Path<(String, String)>) -> Result<HttpResponse, ServiceError> {
    let (student_id, subject_id) = path.into_inner();

    let student = db.with(|conn| {
        if queries::find(conn, &student_id)?.is_none() {
            return Err(ServiceError::NotFound("aluno não encontrado".to_string()));
        }
        if subject_queries::find(conn, &subject_id)?.is_none() {
            return Err(ServiceError::NotFound("matéria não encontrada".to_string()));
        }
        if queries::is_attached(conn, &student_id, &subject_id)? {
            return Err(ServiceError::Conflict("matéria já associada a este aluno".to_string()));
        }

        queries::attach(conn, &student_id, &subject_id)?;
        queries::find(conn, &student_id)?
            .ok_or_else(|| ServiceError::NotFound("aluno não encontrado".to_string()))
    })?;

    info!("Matéria {} associada ao aluno {}", subject_id, student.enrollment);
    Ok(HttpResponse::Ok().json(student))
}
