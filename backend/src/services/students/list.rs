use actix_web::{web, HttpResponse};

use super::queries;
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(db: web::Data<Db>) -> Result<HttpResponse, ServiceError> {
    let students = db.with(|conn| Ok(queries::list(conn)?))?;
    Ok(HttpResponse::Ok().json(students))
}
