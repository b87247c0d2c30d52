use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::subject::{Subject, SubjectRef};

/// Period of the day a student attends. Travels on the wire as `"M"`, `"T"`
/// or `"N"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    #[default]
    #[serde(rename = "M")]
    Morning,
    #[serde(rename = "T")]
    Afternoon,
    #[serde(rename = "N")]
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn code(self) -> &'static str {
        match self {
            Shift::Morning => "M",
            Shift::Afternoon => "T",
            Shift::Evening => "N",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shift| shift.code() == code)
    }

    /// Label shown in the shift selector.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Manhã",
            Shift::Afternoon => "Tarde",
            Shift::Evening => "Noite",
        }
    }
}

/// A student record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned identifier. Never generated by the client.
    pub id: String,
    /// Server-assigned enrollment code. Immutable from the client side.
    pub enrollment: String,
    pub name: String,
    pub current_year: u32,
    #[serde(default)]
    pub shift: Shift,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<Subject>,
}

impl Student {
    /// The student's subjects as references, first occurrence wins.
    pub fn subject_refs(&self) -> Vec<SubjectRef> {
        let mut refs: Vec<SubjectRef> = Vec::with_capacity(self.subjects.len());
        for subject in &self.subjects {
            if !refs.iter().any(|r| r.id == subject.id) {
                refs.push(SubjectRef::from(subject));
            }
        }
        refs
    }
}

/// Payload for `POST /students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub current_year: u32,
    pub shift: Shift,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<SubjectRef>,
}

/// Payload for `PUT /students/{id}`. Carries the stored enrollment unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub enrollment: String,
    pub name: String,
    pub current_year: u32,
    #[serde(default)]
    pub shift: Shift,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<SubjectRef>,
}
