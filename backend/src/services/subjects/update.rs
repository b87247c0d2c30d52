use actix_web::{web, HttpResponse};
use common::model::subject::{NewSubject, Subject};
use log::info;

use super::{not_found, queries, validate};
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(
    db: web::Data<Db>,
    id: web::Path<String>,
    payload: web::Json<NewSubject>,
) -> Result<HttpResponse, ServiceError> {
    let subject = Subject {
        id: id.into_inner(),
        name: validate(&payload)?,
        year: payload.year,
    };
    if !db.with(|conn| Ok(queries::update(conn, &subject)?))? {
        return Err(not_found());
    }
    info!("Matéria atualizada: {}", subject.id);
    Ok(HttpResponse::Ok().json(subject))
}
