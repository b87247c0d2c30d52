use client::workflows::student::{DeleteStudent, DetachSubject};
use client::ApiError;
use common::model::student::{Shift, Student};
use common::model::subject::Subject;

pub enum Msg {
    SetName(String),
    SetCurrentYear(String),
    SetShift(Shift),
    Create,
    Created(Result<Student, ApiError>),

    Edit(Student),
    SetDraftName(String),
    SetDraftCurrentYear(String),
    SetDraftShift(Shift),
    SaveEdit,
    Updated(Result<Student, ApiError>),
    CancelEdit,

    Delete(Student),
    Deleted(DeleteStudent, Result<(), ApiError>),

    Detach(Student, Subject),
    Detached(DetachSubject, Result<(), ApiError>),
}
