//! UI workflows as plain state machines.
//!
//! Each workflow is split around its network call: a `begin_*` step validates
//! local input and yields the request to make (or nothing), and a `finish_*`
//! step consumes the server's answer, sets the feedback line and returns a
//! [`Followup`]. The caller owns the async call in between, which keeps these
//! types free of any runtime and lets a Yew component drive them from its
//! `update`.

pub mod association;
pub mod student;
pub mod teacher;

use crate::store::CollectionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

/// The single inline message a workflow shows. Setting a new one replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}

/// What the caller has to do once a workflow step has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    None,
    Refetch(CollectionKind),
}

/// Blocking yes/no prompt guarding destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Two-phase edit: the committed entity next to the working copy of its
/// editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState<E, D> {
    Idle,
    Editing { original: E, draft: D },
}

impl<E, D> Default for EditState<E, D> {
    fn default() -> Self {
        EditState::Idle
    }
}

impl<E, D> EditState<E, D> {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn original(&self) -> Option<&E> {
        match self {
            EditState::Editing { original, .. } => Some(original),
            EditState::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Drops the draft, whatever state the edit was in.
    pub fn discard(&mut self) {
        *self = EditState::Idle;
    }
}

/// Parses a required positive integer form field.
pub(crate) fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

pub(crate) const MISSING_FIELDS: &str = "Preencha todos os campos obrigatórios.";
pub(crate) const INVALID_YEAR: &str = "O ano deve ser um número inteiro maior que zero.";
