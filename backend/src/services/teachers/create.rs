use actix_web::{web, HttpResponse};
use common::model::teacher::{NewTeacher, Teacher};
use log::info;
use uuid::Uuid;

use super::{queries, validate};
use crate::codes;
use crate::db::Db;
use crate::error::ServiceError;

pub async fn process(db: web::Data<Db>, payload: web::Json<NewTeacher>) -> Result<HttpResponse, ServiceError> {
    let (name, department) = validate(&payload.name, &payload.department)?;
    let code = codes::department_code(&department).ok_or_else(missing_fields)?;

    let teacher = db.with(|conn| {
        let tx = conn.transaction()?;
        let issued = queries::registries(&tx, &code)?;
        let teacher = Teacher {
            id: Uuid::new_v4().to_string(),
            registry: codes::next_registry(&code, issued.iter().map(String::as_str)),
            name,
            department,
        };
        queries::insert(&tx, &teacher)?;
        tx.commit()?;
        Ok(teacher)
    })?;

    info!("Professor criado: {} (registro {})", teacher.name, teacher.registry);
    Ok(HttpResponse::Created().json(teacher))
}

fn missing_fields() -> ServiceError {
    ServiceError::Validation("nome e departamento do professor são obrigatórios".to_string())
}
