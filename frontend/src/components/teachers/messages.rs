use client::workflows::teacher::DeleteTeacher;
use client::ApiError;
use common::model::teacher::Teacher;

pub enum Msg {
    SetName(String),
    SetDepartment(String),
    Create,
    Created(Result<Teacher, ApiError>),

    Edit(Teacher),
    SetDraftName(String),
    SetDraftDepartment(String),
    SaveEdit,
    Updated(Result<Teacher, ApiError>),
    CancelEdit,

    Delete(Teacher),
    Deleted(DeleteTeacher, Result<(), ApiError>),
}
