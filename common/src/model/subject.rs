use serde::{Deserialize, Serialize};

/// A course offered in one curriculum year.
///
/// Subjects are managed server-side; the admin UI only lists them and attaches
/// them to students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Server-assigned identifier.
    pub id: String,
    pub name: String,
    /// Curriculum year the subject belongs to (1 for first-year subjects).
    pub year: u32,
}

/// Payload for `POST /subjects` and `PUT /subjects/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub year: u32,
}

/// Reference to a subject by identifier, as sent inside student payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: String,
}

impl From<&Subject> for SubjectRef {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id.clone(),
        }
    }
}
