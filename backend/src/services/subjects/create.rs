use actix_web::{web, HttpResponse};
use common::model::subject::{NewSubject, Subject};
use log::info;
use uuid::Uuid;

use super::{queries, validate};
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(db: web::Data<Db>, payload: web::Json<NewSubject>) -> Result<HttpResponse, ServiceError> {
    let subject = Subject {
        id: Uuid::new_v4().to_string(),
        name: validate(&payload)?,
        year: payload.year,
    };
    db.with(|conn| Ok(queries::insert(conn, &subject)?))?;
    info!("Matéria criada: {} ({})", subject.name, subject.id);
    Ok(HttpResponse::Created().json(subject))
}
