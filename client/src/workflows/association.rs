//! Attaching a subject to a student.

use common::model::student::Student;
use common::model::subject::Subject;

use super::{Feedback, Followup};
use crate::error::ApiError;
use crate::store::CollectionKind;

const SELECTION_REQUIRED: &str = "Selecione um aluno e uma matéria para associar.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssociationForm {
    /// Selected student identifier; empty when nothing is selected.
    pub student_id: String,
    /// Selected subject identifier; empty when nothing is selected.
    pub subject_id: String,
    pub feedback: Option<Feedback>,
}

impl AssociationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preselects the first student and first subject wherever the current
    /// selection is empty or no longer in the lists (a deleted student, for
    /// one). Empty lists leave the selection empty.
    pub fn select_defaults(&mut self, students: &[Student], subjects: &[Subject]) {
        if !students.iter().any(|student| student.id == self.student_id) {
            self.student_id = students.first().map(|student| student.id.clone()).unwrap_or_default();
        }
        if !subjects.iter().any(|subject| subject.id == self.subject_id) {
            self.subject_id = subjects.first().map(|subject| subject.id.clone()).unwrap_or_default();
        }
    }

    /// The `(student_id, subject_id)` pair to attach, or `None` with a
    /// validation message when either side is unselected.
    pub fn begin_attach(&mut self) -> Option<(String, String)> {
        if self.student_id.is_empty() || self.subject_id.is_empty() {
            self.feedback = Some(Feedback::error(SELECTION_REQUIRED));
            return None;
        }
        self.feedback = None;
        Some((self.student_id.clone(), self.subject_id.clone()))
    }

    pub fn finish_attach(&mut self, result: Result<Student, ApiError>) -> Followup {
        match result {
            Ok(_) => {
                self.feedback = Some(Feedback::success("Matéria associada ao aluno com sucesso!"));
                Followup::Refetch(CollectionKind::Students)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao associar matéria: {err}")));
                Followup::None
            }
        }
    }
}
