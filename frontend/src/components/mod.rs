pub mod association;
pub mod students;
pub mod teachers;
