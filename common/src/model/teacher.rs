use serde::{Deserialize, Serialize};

/// A teacher record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    /// Server-assigned registry code, e.g. `COMP-001`. Immutable from the client side.
    pub registry: String,
    pub name: String,
    pub department: String,
}

/// Payload for `POST /teachers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub department: String,
}

/// Payload for `PUT /teachers/{id}`. Carries the stored registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherUpdate {
    pub registry: String,
    pub name: String,
    pub department: String,
}
