//! Student↔Subject relationship, mutated through the
//! `/students/{student_id}/subjects/{subject_id}` sub-resource.
//!
//! No local rule is enforced here (attaching the same subject twice is the
//! server's call to reject).

use common::model::student::Student;
use log::debug;

use crate::error::Result;
use crate::resource::{decode, ensure_status, ensure_success, item_path, Resource};
use crate::transport::{ApiRequest, Transport};

#[derive(Clone)]
pub struct AssociationClient<T> {
    transport: T,
}

impl<T: Transport> AssociationClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Attaches `subject_id` to `student_id`, returning the updated student.
    pub async fn attach(&self, student_id: &str, subject_id: &str) -> Result<Student> {
        let path = relationship_path(student_id, subject_id);
        debug!("POST {}", path);
        let response = ensure_success(self.transport.send(ApiRequest::post(path)).await?)?;
        decode(&response)
    }

    /// Detaches `subject_id` from `student_id`. Any 2xx counts as success.
    pub async fn detach(&self, student_id: &str, subject_id: &str) -> Result<()> {
        let path = relationship_path(student_id, subject_id);
        debug!("DELETE {}", path);
        let response = self.transport.send(ApiRequest::delete(path)).await?;
        ensure_status(&response)
    }
}

fn relationship_path(student_id: &str, subject_id: &str) -> String {
    format!(
        "{}/subjects/{}",
        item_path(Student::PATH, student_id),
        subject_id
    )
}
