//! Properties for the `StudentsComponent`.

use std::rc::Rc;

use client::store::CollectionKind;
use common::model::student::Student;
use common::model::subject::Subject;
use yew::prelude::*;

use crate::api::GlooTransport;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentsProps {
    pub api: GlooTransport,
    /// Current student collection, as last refetched by the app.
    pub students: Rc<Vec<Student>>,
    /// Pool the initial subjects of a new student are drawn from.
    pub subjects: Rc<Vec<Subject>>,
    /// Asks the app to refetch a collection after a successful mutation.
    pub on_refetch: Callback<CollectionKind>,
}
