//! Teacher create / edit / delete.

use common::model::teacher::{NewTeacher, Teacher, TeacherUpdate};

use super::{Confirm, EditState, Feedback, Followup, MISSING_FIELDS};
use crate::error::ApiError;
use crate::store::CollectionKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeacherForm {
    pub name: String,
    pub department: String,
}

impl From<&Teacher> for TeacherForm {
    fn from(teacher: &Teacher) -> Self {
        Self {
            name: teacher.name.clone(),
            department: teacher.department.clone(),
        }
    }
}

impl TeacherForm {
    fn validate(&self) -> Result<(String, String), Feedback> {
        let name = self.name.trim();
        let department = self.department.trim();
        if name.is_empty() || department.is_empty() {
            return Err(Feedback::error(MISSING_FIELDS));
        }
        Ok((name.to_string(), department.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTeacher {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct TeacherEditor {
    pub form: TeacherForm,
    pub edit: EditState<Teacher, TeacherForm>,
    pub feedback: Option<Feedback>,
}

impl TeacherEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_create(&mut self) -> Option<NewTeacher> {
        match self.form.validate() {
            Ok((name, department)) => {
                self.feedback = None;
                Some(NewTeacher { name, department })
            }
            Err(feedback) => {
                self.feedback = Some(feedback);
                None
            }
        }
    }

    pub fn finish_create(&mut self, result: Result<Teacher, ApiError>) -> Followup {
        match result {
            Ok(teacher) => {
                self.feedback = Some(Feedback::success(format!(
                    "Professor \"{}\" cadastrado com sucesso! Registro: {}",
                    teacher.name, teacher.registry
                )));
                self.form = TeacherForm::default();
                Followup::Refetch(CollectionKind::Teachers)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao cadastrar professor: {err}")));
                Followup::None
            }
        }
    }

    pub fn begin_edit(&mut self, teacher: &Teacher) {
        self.edit = EditState::Editing {
            original: teacher.clone(),
            draft: TeacherForm::from(teacher),
        };
        self.feedback = None;
    }

    pub fn cancel_edit(&mut self) {
        self.edit.discard();
        self.feedback = None;
    }

    /// The PUT for the current draft, registry taken from the original.
    pub fn begin_update(&mut self) -> Option<(String, TeacherUpdate)> {
        let EditState::Editing { original, draft } = &self.edit else {
            return None;
        };
        match draft.validate() {
            Ok((name, department)) => Some((
                original.id.clone(),
                TeacherUpdate {
                    registry: original.registry.clone(),
                    name,
                    department,
                },
            )),
            Err(feedback) => {
                self.feedback = Some(feedback);
                None
            }
        }
    }

    pub fn finish_update(&mut self, result: Result<Teacher, ApiError>) -> Followup {
        match result {
            Ok(teacher) => {
                self.feedback = Some(Feedback::success(format!(
                    "Professor \"{}\" atualizado com sucesso!",
                    teacher.name
                )));
                self.edit.discard();
                Followup::Refetch(CollectionKind::Teachers)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao atualizar professor: {err}")));
                Followup::None
            }
        }
    }

    pub fn begin_delete<C: Confirm + ?Sized>(&mut self, teacher: &Teacher, confirm: &C) -> Option<DeleteTeacher> {
        let prompt = format!("Tem certeza que deseja deletar o professor {}?", teacher.name);
        if !confirm.confirm(&prompt) {
            return None;
        }
        Some(DeleteTeacher {
            id: teacher.id.clone(),
            name: teacher.name.clone(),
        })
    }

    pub fn finish_delete(&mut self, request: &DeleteTeacher, result: Result<(), ApiError>) -> Followup {
        match result {
            Ok(()) => {
                self.feedback = Some(Feedback::success(format!(
                    "Professor \"{}\" deletado com sucesso!",
                    request.name
                )));
                Followup::Refetch(CollectionKind::Teachers)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao deletar professor: {err}")));
                Followup::None
            }
        }
    }
}
