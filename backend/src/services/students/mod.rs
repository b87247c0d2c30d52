//! # Student Service
//!
//! Student records under `/students`, including the student↔subject
//! association sub-resource. Enrollments are assigned here and can never be
//! changed by a client.

mod attach;
mod create;
mod delete;
mod detach;
mod get;
mod list;
mod queries;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

use crate::error::ServiceError;

const API_PATH: &str = "/students";

/// Registered routes:
///
/// * `GET /` and `POST /`
/// * `GET /{id}`, `PUT /{id}`, `DELETE /{id}`
/// * `POST /{student_id}/subjects/{subject_id}` attaches a subject
/// * `DELETE /{student_id}/subjects/{subject_id}` detaches it
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
        .route("/{student_id}/subjects/{subject_id}", post().to(attach::process))
        .route("/{student_id}/subjects/{subject_id}", delete().to(detach::process))
}

/// Trimmed name, or a validation error when the name is blank or the year
/// is zero.
fn validate(name: &str, current_year: u32) -> Result<String, ServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::Validation("nome do aluno é obrigatório".to_string()));
    }
    if current_year == 0 {
        return Err(ServiceError::Validation("ano atual deve ser maior que zero".to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Db;
    use crate::error::json_config;
    use crate::services::subjects::queries as subject_queries;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::student::{Shift, Student};
    use common::model::subject::Subject;
    use common::requests::ErrorBody;
    use serde_json::json;

    fn db_with_subjects(ids: &[&str]) -> web::Data<Db> {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            for id in ids {
                subject_queries::insert(
                    conn,
                    &Subject {
                        id: id.to_string(),
                        name: format!("Matéria {}", id),
                        year: 1,
                    },
                )?;
            }
            Ok(())
        })
        .unwrap();
        web::Data::new(db)
    }

    fn new_student(body: serde_json::Value) -> test::TestRequest {
        test::TestRequest::post().uri("/students").set_json(body)
    }

    #[actix_web::test]
    async fn create_assigns_id_and_enrollment() {
        let app = test::init_service(
            App::new()
                .app_data(db_with_subjects(&["s1", "s2"]))
                .app_data(json_config())
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, new_student(json!({ "name": " Ana ", "current_year": 1, "shift": "T", "subjects": [{"id": "s1"}, {"id": "s2"}, {"id": "s1"}] })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let first: Student = test::read_body_json(resp).await;
        assert_eq!(first.name, "Ana");
        assert_eq!(first.shift, Shift::Afternoon);
        assert_eq!(first.subjects.len(), 2);
        assert_eq!(first.enrollment.len(), 8);
        assert!(first.enrollment.ends_with("0001"));

        let resp = test::call_service(&app, new_student(json!({ "name": "Bruno", "current_year": 2, "shift": "M", "subjects": null })).to_request()).await;
        let second: Student = test::read_body_json(resp).await;
        assert!(second.enrollment.ends_with("0002"));
        assert_ne!(first.id, second.id);

        let req = test::TestRequest::get().uri("/students").to_request();
        let listed: Vec<Student> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![first, second]);
    }

    #[actix_web::test]
    async fn create_rejects_unknown_subject_and_stores_nothing() {
        let app = test::init_service(
            App::new()
                .app_data(db_with_subjects(&["s1"]))
                .app_data(json_config())
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, new_student(json!({ "name": "Ana", "current_year": 1, "shift": "M", "subjects": [{"id": "s1"}, {"id": "x"}] })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message.as_deref(), Some("matéria não encontrada: x"));

        let req = test::TestRequest::get().uri("/students").to_request();
        let listed: Vec<Student> = test::call_and_read_body_json(&app, req).await;
        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn create_validates_fields() {
        let app = test::init_service(
            App::new()
                .app_data(db_with_subjects(&[]))
                .app_data(json_config())
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, new_student(json!({ "name": "  ", "current_year": 1, "shift": "M", "subjects": [] })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, new_student(json!({ "name": "Ana", "current_year": 0, "shift": "M", "subjects": [] })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, new_student(json!({ "name": "Ana" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(body.message.unwrap().starts_with("Requisição inválida"));
    }

    #[actix_web::test]
    async fn update_keeps_enrollment_and_subjects() {
        let app = test::init_service(
            App::new()
                .app_data(db_with_subjects(&["s1"]))
                .app_data(json_config())
                .service(configure_routes()),
        )
        .await;
        let resp = test::call_service(&app, new_student(json!({ "name": "Ana", "current_year": 1, "shift": "M", "subjects": [{"id": "s1"}] })).to_request()).await;
        let student: Student = test::read_body_json(resp).await;

        let req = test::TestRequest::put()
            .uri(&format!("/students/{}", student.id))
            .set_json(json!({ "enrollment": student.enrollment, "name": "Ana Maria", "current_year": 2, "shift": "N", "subjects": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Student = test::read_body_json(resp).await;
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.current_year, 2);
        assert_eq!(updated.shift, Shift::Evening);
        assert_eq!(updated.enrollment, student.enrollment);
        assert_eq!(updated.subjects, student.subjects);

        let req = test::TestRequest::put()
            .uri(&format!("/students/{}", student.id))
            .set_json(json!({ "enrollment": "19990001", "name": "Ana", "current_year": 1, "shift": "M" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message.as_deref(), Some("matrícula não pode ser alterada"));

        let req = test::TestRequest::put()
            .uri("/students/missing")
            .set_json(json!({ "enrollment": "x", "name": "Ana", "current_year": 1, "shift": "M" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn attach_and_detach_subjects() {
        let app = test::init_service(
            App::new()
                .app_data(db_with_subjects(&["s1", "s2"]))
                .app_data(json_config())
                .service(configure_routes()),
        )
        .await;
        let resp = test::call_service(&app, new_student(json!({ "name": "Ana", "current_year": 1, "shift": "M", "subjects": [{"id": "s1"}] })).to_request()).await;
        let student: Student = test::read_body_json(resp).await;
        let path = format!("/students/{}/subjects/s2", student.id);

        let req = test::TestRequest::post().uri(&path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let attached: Student = test::read_body_json(resp).await;
        assert_eq!(attached.subjects.len(), 2);

        let req = test::TestRequest::post().uri(&path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message.as_deref(), Some("matéria já associada a este aluno"));

        let req = test::TestRequest::post()
            .uri(&format!("/students/{}/subjects/nope", student.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri(&path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri(&path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message.as_deref(), Some("matéria não associada a este aluno"));

        let req = test::TestRequest::get().uri(&format!("/students/{}", student.id)).to_request();
        let fetched: Student = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.subject_refs().len(), 1);
    }

    #[actix_web::test]
    async fn delete_is_bodyless_and_404_when_missing() {
        let app = test::init_service(
            App::new()
                .app_data(db_with_subjects(&["s1"]))
                .app_data(json_config())
                .service(configure_routes()),
        )
        .await;
        let resp = test::call_service(&app, new_student(json!({ "name": "Ana", "current_year": 1, "shift": "M", "subjects": [{"id": "s1"}] })).to_request()).await;
        let student: Student = test::read_body_json(resp).await;

        let req = test::TestRequest::delete().uri(&format!("/students/{}", student.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::delete().uri(&format!("/students/{}", student.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message.as_deref(), Some("aluno não encontrado para exclusão"));
    }
}
