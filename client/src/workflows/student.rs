//! Student create / edit / delete, plus removing a single subject from a
//! student.

use common::model::student::{NewStudent, Shift, Student, StudentUpdate};
use common::model::subject::{Subject, SubjectRef};
use rand::Rng;

use super::{parse_positive, Confirm, EditState, Feedback, Followup, INVALID_YEAR, MISSING_FIELDS};
use crate::error::ApiError;
use crate::selection::{pick, FIRST_YEAR, INITIAL_SUBJECT_COUNT};
use crate::store::CollectionKind;

const SHORT_SUBJECT_POOL: &str =
    "Aviso: Não há 5 matérias suficientes do primeiro ano para associar.";
const EMPTY_SUBJECT_POOL: &str =
    "Aviso: Nenhuma matéria do primeiro ano disponível para associação automática.";

/// Raw values of the student fields as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentForm {
    pub name: String,
    pub current_year: String,
    pub shift: Shift,
}

impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            current_year: student.current_year.to_string(),
            shift: student.shift,
        }
    }
}

impl StudentForm {
    fn validate(&self) -> Result<(String, u32), Feedback> {
        let name = self.name.trim();
        if name.is_empty() || self.current_year.trim().is_empty() {
            return Err(Feedback::error(MISSING_FIELDS));
        }
        let current_year = parse_positive(&self.current_year).ok_or_else(|| Feedback::error(INVALID_YEAR))?;
        Ok((name.to_string(), current_year))
    }
}

/// A confirmed deletion waiting for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudent {
    pub id: String,
    pub name: String,
}

/// A subject removal waiting for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachSubject {
    pub student_id: String,
    pub subject_id: String,
    pub subject_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct StudentEditor {
    /// Creation form.
    pub form: StudentForm,
    pub edit: EditState<Student, StudentForm>,
    pub feedback: Option<Feedback>,
    pending_warning: Option<String>,
}

impl StudentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the creation form and picks the initial first-year
    /// subjects. Returns the payload to POST, or `None` with an error
    /// feedback when a required field is missing.
    ///
    /// A short or empty subject pool only raises a warning.
    pub fn begin_create<R: Rng + ?Sized>(&mut self, subjects: &[Subject], rng: &mut R) -> Option<NewStudent> {
        self.pending_warning = None;
        let (name, current_year) = match self.form.validate() {
            Ok(fields) => fields,
            Err(feedback) => {
                self.feedback = Some(feedback);
                return None;
            }
        };

        let picked = pick(subjects, FIRST_YEAR, INITIAL_SUBJECT_COUNT, rng);
        if picked.is_empty() {
            self.pending_warning = Some(EMPTY_SUBJECT_POOL.to_string());
        } else if picked.len() < INITIAL_SUBJECT_COUNT {
            self.pending_warning = Some(SHORT_SUBJECT_POOL.to_string());
        }
        self.feedback = self.pending_warning.clone().map(Feedback::warning);

        Some(NewStudent {
            name,
            current_year,
            shift: self.form.shift,
            subjects: picked.iter().map(SubjectRef::from).collect(),
        })
    }

    pub fn finish_create(&mut self, result: Result<Student, ApiError>) -> Followup {
        let warning = self.pending_warning.take();
        match result {
            Ok(student) => {
                let text = format!(
                    "Aluno \"{}\" cadastrado com sucesso! Matrícula: {}",
                    student.name, student.enrollment
                );
                self.feedback = Some(match warning {
                    Some(warning) => Feedback::warning(format!("{text} {warning}")),
                    None => Feedback::success(text),
                });
                self.form = StudentForm::default();
                Followup::Refetch(CollectionKind::Students)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao cadastrar aluno: {err}")));
                Followup::None
            }
        }
    }

    /// Snapshots `student` into a draft and enters edit mode.
    pub fn begin_edit(&mut self, student: &Student) {
        self.edit = EditState::Editing {
            original: student.clone(),
            draft: StudentForm::from(student),
        };
        self.feedback = None;
    }

    /// Leaves edit mode without contacting the server.
    pub fn cancel_edit(&mut self) {
        self.edit.discard();
        self.feedback = None;
    }

    /// Builds the PUT for the current draft: the draft's fields over the
    /// original's enrollment and subjects.
    pub fn begin_update(&mut self) -> Option<(String, StudentUpdate)> {
        let EditState::Editing { original, draft } = &self.edit else {
            return None;
        };
        let (name, current_year) = match draft.validate() {
            Ok(fields) => fields,
            Err(feedback) => {
                self.feedback = Some(feedback);
                return None;
            }
        };
        let update = StudentUpdate {
            enrollment: original.enrollment.clone(),
            name,
            current_year,
            shift: draft.shift,
            subjects: original.subject_refs(),
        };
        Some((original.id.clone(), update))
    }

    /// Success leaves edit mode; failure keeps the draft open.
    pub fn finish_update(&mut self, result: Result<Student, ApiError>) -> Followup {
        match result {
            Ok(student) => {
                self.feedback = Some(Feedback::success(format!(
                    "Aluno \"{}\" atualizado com sucesso!",
                    student.name
                )));
                self.edit.discard();
                Followup::Refetch(CollectionKind::Students)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao atualizar aluno: {err}")));
                Followup::None
            }
        }
    }

    /// Asks for confirmation. `None` means the user declined and nothing
    /// must be sent.
    pub fn begin_delete<C: Confirm + ?Sized>(&mut self, student: &Student, confirm: &C) -> Option<DeleteStudent> {
        let prompt = format!("Tem certeza que deseja deletar o aluno {}?", student.name);
        if !confirm.confirm(&prompt) {
            return None;
        }
        Some(DeleteStudent {
            id: student.id.clone(),
            name: student.name.clone(),
        })
    }

    pub fn finish_delete(&mut self, request: &DeleteStudent, result: Result<(), ApiError>) -> Followup {
        match result {
            Ok(()) => {
                self.feedback = Some(Feedback::success(format!(
                    "Aluno \"{}\" deletado com sucesso!",
                    request.name
                )));
                Followup::Refetch(CollectionKind::Students)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao deletar aluno: {err}")));
                Followup::None
            }
        }
    }

    pub fn begin_detach(&self, student: &Student, subject: &Subject) -> DetachSubject {
        DetachSubject {
            student_id: student.id.clone(),
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
        }
    }

    pub fn finish_detach(&mut self, request: &DetachSubject, result: Result<(), ApiError>) -> Followup {
        match result {
            Ok(()) => {
                self.feedback = Some(Feedback::success("Matéria removida do aluno com sucesso!"));
                Followup::Refetch(CollectionKind::Students)
            }
            Err(err) => {
                self.feedback = Some(Feedback::error(format!("Erro ao remover matéria: {err}")));
                Followup::None
            }
        }
    }
}
