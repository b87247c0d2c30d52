use std::rc::Rc;

use client::store::CollectionKind;
use common::model::student::Student;
use common::model::subject::Subject;
use yew::prelude::*;

use crate::api::GlooTransport;

#[derive(Properties, PartialEq, Clone)]
pub struct AssociationProps {
    pub api: GlooTransport,
    pub students: Rc<Vec<Student>>,
    pub subjects: Rc<Vec<Subject>>,
    pub on_refetch: Callback<CollectionKind>,
}
