use actix_web::{web, HttpResponse};
use common::model::student::StudentUpdate;
use log::info;

use super::{queries, validate};
use crate::db::Db;
use crate::error::ServiceError;

/// Replaces name, year and shift. The enrollment is checked, never written,
/// and associations are left alone.
pub async fn process(
    db: web::Data<Db>,
    id: web::Path<String>,
    payload: web::Json<StudentUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let name = validate(&payload.name, payload.current_year)?;

    let student = db.with(|conn| {
        let stored = queries::find(conn, &id)?
            .ok_or_else(|| ServiceError::NotFound("aluno não encontrado para atualização".to_string()))?;
        if stored.enrollment != payload.enrollment {
            return Err(ServiceError::Validation("matrícula não pode ser alterada".to_string()));
        }

        queries::update(conn, &id, &name, payload.current_year, payload.shift)?;
        queries::find(conn, &id)?
            .ok_or_else(|| ServiceError::NotFound("aluno não encontrado para atualização".to_string()))
    })?;

    info!("Aluno atualizado: {} ({})", student.name, student.enrollment);
    Ok(HttpResponse::Ok().json(student))
}
