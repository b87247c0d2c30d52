mod support;

use client::association::AssociationClient;
use client::error::UNKNOWN_API_ERROR;
use client::resource::ResourceClient;
use client::{ApiError, Method};
use support::{student, subject, teacher, FakeApi};
use common::model::student::{NewStudent, Shift, Student, StudentUpdate};
use common::model::subject::{Subject, SubjectRef};
use common::model::teacher::{NewTeacher, Teacher};

#[tokio::test]
async fn list_all_returns_server_listing() {
    let api = FakeApi::new().with_teachers(vec![teacher("1", "Silva"), teacher("2", "Souza")]);
    let teachers = ResourceClient::<Teacher, _>::new(api.clone());

    let listing = teachers.list_all().await.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing[1].name, "Souza");
    assert_eq!(api.count(Method::Get, "/teachers"), 1);
}

#[tokio::test]
async fn null_listing_is_empty() {
    let api = FakeApi::new();
    api.respond(Method::Get, "/subjects", 200, "OK", "null");
    let subjects = ResourceClient::<Subject, _>::new(api);

    assert!(subjects.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn error_message_comes_from_body() {
    let api = FakeApi::new();
    api.respond(
        Method::Get,
        "/students",
        500,
        "Internal Server Error",
        r#"{"message":"banco indisponível"}"#,
    );
    let students = ResourceClient::<Student, _>::new(api);

    let err = students.list_all().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Request {
            status: 500,
            message: "banco indisponível".into()
        }
    );
}

#[tokio::test]
async fn unparseable_error_body_uses_generic_message() {
    let api = FakeApi::new();
    api.respond(Method::Get, "/students", 502, "Bad Gateway", "<html>proxy</html>");
    let students = ResourceClient::<Student, _>::new(api);

    let err = students.list_all().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), UNKNOWN_API_ERROR);
}

#[tokio::test]
async fn error_body_without_message_uses_status_phrase() {
    let api = FakeApi::new();
    api.respond(Method::Get, "/teachers", 503, "Service Unavailable", "{}");
    let teachers = ResourceClient::<Teacher, _>::new(api);

    let err = teachers.list_all().await.unwrap_err();

    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn undecodable_success_body_is_a_json_error() {
    let api = FakeApi::new();
    api.respond(Method::Get, "/teachers", 200, "OK", "[{\"id\":1}]");
    let teachers = ResourceClient::<Teacher, _>::new(api);

    let err = teachers.list_all().await.unwrap_err();

    assert!(matches!(err, ApiError::Json(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn transport_failure_is_reported_as_is() {
    let api = FakeApi::new();
    api.set_offline(true);
    let teachers = ResourceClient::<Teacher, _>::new(api);

    let err = teachers.list_all().await.unwrap_err();

    assert_eq!(err, ApiError::Transport("Failed to fetch".into()));
}

#[tokio::test]
async fn create_returns_server_assigned_fields() {
    let api = FakeApi::new().with_subjects(vec![subject("s1", 1)]);
    let students = ResourceClient::<Student, _>::new(api.clone());

    let created = students
        .create(&NewStudent {
            name: "Ana".into(),
            current_year: 1,
            shift: Shift::Afternoon,
            subjects: vec![SubjectRef { id: "s1".into() }],
        })
        .await
        .unwrap();

    assert_eq!(created.id, "101");
    assert_eq!(created.enrollment, "20250101");
    assert_eq!(created.shift, Shift::Afternoon);
    assert_eq!(created.subjects, vec![subject("s1", 1)]);

    let sent = api.requests().pop().unwrap();
    assert_eq!(sent.method, Method::Post);
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["shift"], "T");
    assert_eq!(body["subjects"][0]["id"], "s1");
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn update_sends_put_to_item_path() {
    let api = FakeApi::new().with_students(vec![student("3", "Ana")]);
    let students = ResourceClient::<Student, _>::new(api.clone());

    let updated = students
        .update(
            "3",
            &StudentUpdate {
                enrollment: "20250003".into(),
                name: "Ana Maria".into(),
                current_year: 2,
                shift: Shift::Evening,
                subjects: Vec::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(api.count(Method::Put, "/students/3"), 1);
}

#[tokio::test]
async fn update_with_changed_code_is_rejected() {
    let api = FakeApi::new().with_students(vec![student("3", "Ana")]);
    let students = ResourceClient::<Student, _>::new(api.clone());

    let err = students
        .update(
            "3",
            &StudentUpdate {
                enrollment: "19990001".into(),
                name: "Ana".into(),
                current_year: 1,
                shift: Shift::Morning,
                subjects: Vec::new(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "matrícula não pode ser alterada");
    assert_eq!(api.server_students()[0].enrollment, "20250003");
}

#[tokio::test]
async fn remove_accepts_no_content() {
    let api = FakeApi::new().with_teachers(vec![teacher("7", "Silva")]);
    let teachers = ResourceClient::<Teacher, _>::new(api.clone());

    teachers.remove("7").await.unwrap();

    assert!(api.server_teachers().is_empty());
}

#[tokio::test]
async fn remove_ignores_success_body() {
    let api = FakeApi::new();
    api.respond(Method::Delete, "/teachers/7", 200, "OK", "not json at all");
    let teachers = ResourceClient::<Teacher, _>::new(api);

    assert_eq!(teachers.remove("7").await, Ok(()));
}

#[tokio::test]
async fn remove_failure_uses_status_phrase() {
    let api = FakeApi::new();
    let teachers = ResourceClient::<Teacher, _>::new(api.clone());

    let err = teachers.remove("404").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Request {
            status: 404,
            message: "Not Found".into()
        }
    );

    api.respond(Method::Delete, "/teachers/9", 500, "", "");
    let err = teachers.remove("9").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn create_teacher_gets_registry() {
    let api = FakeApi::new();
    let teachers = ResourceClient::<Teacher, _>::new(api);

    let created = teachers
        .create(&NewTeacher {
            name: "Silva".into(),
            department: "Computação".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.registry, "COMP-101");
}

#[tokio::test]
async fn attach_posts_without_body_and_returns_student() {
    let api = FakeApi::new()
        .with_students(vec![student("3", "Ana")])
        .with_subjects(vec![subject("12", 1)]);
    let associations = AssociationClient::new(api.clone());

    let updated = associations.attach("3", "12").await.unwrap();

    assert_eq!(updated.subjects, vec![subject("12", 1)]);
    let sent = api.requests().pop().unwrap();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, "/students/3/subjects/12");
    assert_eq!(sent.body, None);
}

#[tokio::test]
async fn duplicate_attach_is_left_to_the_server() {
    let api = FakeApi::new()
        .with_students(vec![student("3", "Ana")])
        .with_subjects(vec![subject("12", 1)]);
    let associations = AssociationClient::new(api.clone());

    associations.attach("3", "12").await.unwrap();
    let err = associations.attach("3", "12").await.unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(api.count(Method::Post, "/students/3/subjects/12"), 2);
}

#[tokio::test]
async fn detach_removes_relationship() {
    let api = FakeApi::new()
        .with_students(vec![student("3", "Ana")])
        .with_subjects(vec![subject("12", 1)]);
    let associations = AssociationClient::new(api.clone());
    associations.attach("3", "12").await.unwrap();

    associations.detach("3", "12").await.unwrap();

    assert!(api.server_students()[0].subjects.is_empty());
    assert_eq!(
        associations.detach("3", "12").await.unwrap_err().status(),
        Some(404)
    );
}
