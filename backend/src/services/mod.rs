//! HTTP services, one module per resource. Each exposes `configure_routes()`
//! returning the actix `Scope` mounted by `main`.

pub mod students;
pub mod subjects;
pub mod teachers;
