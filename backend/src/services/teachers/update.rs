use actix_web::{web, HttpResponse};
use common::model::teacher::TeacherUpdate;
use log::info;

use super::{queries, validate};
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(
    db: web::Data<Db>,
    id: web::Path<String>,
    payload: web::Json<TeacherUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let (name, department) = validate(&payload.name, &payload.department)?;

    let teacher = db.with(|conn| {
        let stored = queries::find(conn, &id)?
            .ok_or_else(|| ServiceError::NotFound("professor não encontrado para atualização".to_string()))?;
        if stored.registry != payload.registry {
            return Err(ServiceError::Validation("registro não pode ser alterado".to_string()));
        }

        queries::update(conn, &id, &name, &department)?;
        queries::find(conn, &id)?
            .ok_or_else(|| ServiceError::NotFound("professor não encontrado para atualização".to_string()))
    })?;

    info!("Professor atualizado: {} ({})", teacher.name, teacher.registry);
    Ok(HttpResponse::Ok().json(teacher))
}
