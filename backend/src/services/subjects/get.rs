use actix_web::{web, HttpResponse};

use super::{not_found, queries};
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(db: web::Data<Db>, id: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let subject = db
        .with(|conn| Ok(queries::find(conn, &id)?))?
        .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(subject))
}
