use client::ApiError;
use common::model::student::Student;

pub enum Msg {
    SelectStudent(String),
    SelectSubject(String),
    Attach,
    Attached(Result<Student, ApiError>),
}
