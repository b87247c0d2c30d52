use actix_web::{web, HttpResponse};
use chrono::{Datelike, Local};
use common::model::student::{NewStudent, Student};
use log::info;
use uuid::Uuid;

use super::{queries, validate};
use crate::codes;
use crate::db::Db;
use crate::error::ServiceError;
use crate::services::subjects::queries as subject_queries;

pub async fn process(db: web::Data<Db>, payload: web::Json<NewStudent>) -> Result<HttpResponse, ServiceError> {
    let payload = payload.into_inner();
    let name = validate(&payload.name, payload.current_year)?;

    let mut subject_ids: Vec<String> = Vec::with_capacity(payload.subjects.len());
    for subject in payload.subjects {
        if !subject_ids.contains(&subject.id) {
            subject_ids.push(subject.id);
        }
    }

    let student = db.with(|conn| {
        let tx = conn.transaction()?;
        for id in &subject_ids {
            if subject_queries::find(&tx, id)?.is_none() {
                return Err(ServiceError::Validation(format!("matéria não encontrada: {}", id)));
            }
        }

        let existing = queries::enrollments(&tx)?;
        let student = Student {
            id: Uuid::new_v4().to_string(),
            enrollment: codes::next_enrollment(Local::now().year(), existing.iter().map(String::as_str)),
            name,
            current_year: payload.current_year,
            shift: payload.shift,
            subjects: Vec::new(),
        };
        queries::insert(&tx, &student, &subject_ids)?;
        let stored = queries::find(&tx, &student.id)?;
        tx.commit()?;
        stored.ok_or_else(|| ServiceError::Internal("aluno recém-criado não encontrado".to_string()))
    })?;

    info!(
        "Aluno criado: {} (matrícula {}, {} matérias)",
        student.name,
        student.enrollment,
        student.subjects.len()
    );
    Ok(HttpResponse::Created().json(student))
}
