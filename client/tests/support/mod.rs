//! In-memory stand-in for the registration API.
//!
//! `FakeApi` implements `Transport` with the server semantics the client
//! relies on (assigned ids and codes, code echo checks, association rules)
//! and records every request. Individual routes can be overridden with a
//! canned response, and the whole thing can be taken offline.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use client::{ApiError, ApiRequest, ApiResponse, Method, Transport};
use common::model::student::{NewStudent, Shift, Student, StudentUpdate};
use common::model::subject::Subject;
use common::model::teacher::{NewTeacher, Teacher, TeacherUpdate};
use serde::Serialize;
use serde_json::json;

#[derive(Default)]
struct State {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    subjects: Vec<Subject>,
    next_id: u32,
    requests: Vec<ApiRequest>,
    overrides: HashMap<(Method, String), ApiResponse>,
    offline: bool,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<State>>,
}

pub fn subject(id: &str, year: u32) -> Subject {
    Subject {
        id: id.to_string(),
        name: format!("Matéria {id}"),
        year,
    }
}

pub fn student(id: &str, name: &str) -> Student {
    Student {
        id: id.to_string(),
        enrollment: format!("2025{:0>4}", id),
        name: name.to_string(),
        current_year: 1,
        shift: Shift::Morning,
        subjects: Vec::new(),
    }
}

pub fn teacher(id: &str, name: &str) -> Teacher {
    Teacher {
        id: id.to_string(),
        registry: format!("COMP-{:0>3}", id),
        name: name.to_string(),
        department: "Computação".to_string(),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.borrow_mut().next_id = 100;
        api
    }

    pub fn with_subjects(self, subjects: Vec<Subject>) -> Self {
        self.state.borrow_mut().subjects = subjects;
        self
    }

    pub fn with_students(self, students: Vec<Student>) -> Self {
        self.state.borrow_mut().students = students;
        self
    }

    pub fn with_teachers(self, teachers: Vec<Teacher>) -> Self {
        self.state.borrow_mut().teachers = teachers;
        self
    }

    /// Adds a student directly on the server side, bypassing the client.
    pub fn insert_student(&self, student: Student) {
        self.state.borrow_mut().students.push(student);
    }

    /// Answers every `method path` request with the given response until cleared.
    pub fn respond(&self, method: Method, path: &str, status: u16, status_text: &str, body: &str) {
        self.state.borrow_mut().overrides.insert(
            (method, path.to_string()),
            ApiResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            },
        );
    }

    pub fn clear_overrides(&self) {
        self.state.borrow_mut().overrides.clear();
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn server_students(&self) -> Vec<Student> {
        self.state.borrow().students.clone()
    }

    pub fn server_teachers(&self) -> Vec<Teacher> {
        self.state.borrow().teachers.clone()
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let segments: Vec<&str> = request.path.trim_start_matches('/').split('/').collect();
        let mut state = self.state.borrow_mut();
        match (request.method, segments.as_slice()) {
            (Method::Get, ["students"]) => ok(200, &state.students),
            (Method::Get, ["teachers"]) => ok(200, &state.teachers),
            (Method::Get, ["subjects"]) => ok(200, &state.subjects),

            (Method::Post, ["students"]) => {
                let Some(payload) = parse::<NewStudent>(request) else {
                    return bad_request("Requisição inválida");
                };
                let mut subjects = Vec::new();
                for r in &payload.subjects {
                    match state.subjects.iter().find(|s| s.id == r.id) {
                        Some(s) => subjects.push(s.clone()),
                        None => return bad_request("matéria não encontrada"),
                    }
                }
                state.next_id += 1;
                let id = state.next_id.to_string();
                let created = Student {
                    enrollment: format!("2025{:0>4}", id),
                    id,
                    name: payload.name,
                    current_year: payload.current_year,
                    shift: payload.shift,
                    subjects,
                };
                state.students.push(created.clone());
                ok(201, &created)
            }
            (Method::Put, ["students", id]) => {
                let Some(payload) = parse::<StudentUpdate>(request) else {
                    return bad_request("Requisição inválida");
                };
                let Some(existing) = state.students.iter_mut().find(|s| s.id == *id) else {
                    return not_found("aluno não encontrado para atualização");
                };
                if existing.enrollment != payload.enrollment {
                    return bad_request("matrícula não pode ser alterada");
                }
                existing.name = payload.name;
                existing.current_year = payload.current_year;
                existing.shift = payload.shift;
                ok(200, &existing.clone())
            }
            (Method::Delete, ["students", id]) => {
                let before = state.students.len();
                state.students.retain(|s| s.id != *id);
                if state.students.len() == before {
                    not_found("aluno não encontrado para exclusão")
                } else {
                    no_content()
                }
            }
            (Method::Post, ["students", student_id, "subjects", subject_id]) => {
                let Some(subject) = state.subjects.iter().find(|s| s.id == *subject_id).cloned() else {
                    return not_found("matéria não encontrada");
                };
                let Some(student) = state.students.iter_mut().find(|s| s.id == *student_id) else {
                    return not_found("aluno não encontrado");
                };
                if student.subjects.iter().any(|s| s.id == subject.id) {
                    return error(409, "Conflict", "matéria já associada a este aluno");
                }
                student.subjects.push(subject);
                ok(200, &student.clone())
            }
            (Method::Delete, ["students", student_id, "subjects", subject_id]) => {
                let Some(student) = state.students.iter_mut().find(|s| s.id == *student_id) else {
                    return not_found("aluno não encontrado");
                };
                let before = student.subjects.len();
                student.subjects.retain(|s| s.id != *subject_id);
                if student.subjects.len() == before {
                    not_found("matéria não associada a este aluno")
                } else {
                    no_content()
                }
            }

            (Method::Post, ["teachers"]) => {
                let Some(payload) = parse::<NewTeacher>(request) else {
                    return bad_request("Requisição inválida");
                };
                state.next_id += 1;
                let id = state.next_id.to_string();
                let created = Teacher {
                    registry: format!("COMP-{:0>3}", id),
                    id,
                    name: payload.name,
                    department: payload.department,
                };
                state.teachers.push(created.clone());
                ok(201, &created)
            }
            (Method::Put, ["teachers", id]) => {
                let Some(payload) = parse::<TeacherUpdate>(request) else {
                    return bad_request("Requisição inválida");
                };
                let Some(existing) = state.teachers.iter_mut().find(|t| t.id == *id) else {
                    return not_found("professor não encontrado para atualização");
                };
                if existing.registry != payload.registry {
                    return bad_request("registro não pode ser alterado");
                }
                existing.name = payload.name;
                existing.department = payload.department;
                ok(200, &existing.clone())
            }
            (Method::Delete, ["teachers", id]) => {
                let before = state.teachers.len();
                state.teachers.retain(|t| t.id != *id);
                if state.teachers.len() == before {
                    not_found("professor não encontrado para exclusão")
                } else {
                    no_content()
                }
            }

            _ => not_found("rota não encontrada"),
        }
    }
}

impl Transport for FakeApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let (offline, canned) = {
            let mut state = self.state.borrow_mut();
            state.requests.push(request.clone());
            let canned = state
                .overrides
                .get(&(request.method, request.path.clone()))
                .cloned();
            (state.offline, canned)
        };
        if offline {
            return Err(ApiError::Transport("Failed to fetch".to_string()));
        }
        Ok(match canned {
            Some(response) => response,
            None => self.handle(&request),
        })
    }
}

fn parse<P: serde::de::DeserializeOwned>(request: &ApiRequest) -> Option<P> {
    serde_json::from_str(request.body.as_deref()?).ok()
}

fn ok<B: Serialize + ?Sized>(status: u16, body: &B) -> ApiResponse {
    ApiResponse {
        status,
        status_text: if status == 201 { "Created" } else { "OK" }.to_string(),
        body: serde_json::to_string(body).unwrap(),
    }
}

fn no_content() -> ApiResponse {
    ApiResponse {
        status: 204,
        status_text: "No Content".to_string(),
        body: String::new(),
    }
}

fn error(status: u16, status_text: &str, message: &str) -> ApiResponse {
    ApiResponse {
        status,
        status_text: status_text.to_string(),
        body: json!({ "message": message }).to_string(),
    }
}

fn bad_request(message: &str) -> ApiResponse {
    error(400, "Bad Request", message)
}

fn not_found(message: &str) -> ApiResponse {
    error(404, "Not Found", message)
}
